use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::events::NewUpcomingEvent;
use crate::dto::leaderboard::NewLeaderboardUser;
use crate::dto::tournament::{NewContest, NewScore, ParticipantInput};
use crate::error::Result;
use crate::models::{Contest, LeaderboardUser, Participant, Score, UpcomingEvent};

/// All three tournament tables as read at a single point in time
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub contests: Vec<Contest>,
    pub participants: Vec<Participant>,
    pub scores: Vec<Score>,
}

/// Persistence contract for tournament and leaderboard data.
///
/// Implementations enforce referential integrity on score inserts and apply
/// cascading deletes as one atomic unit, so a concurrent [`EntityStore::snapshot`]
/// never observes a score whose contest or participant is gone.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Contests ordered by creation time
    async fn list_contests(&self) -> Result<Vec<Contest>>;

    /// Participants ordered by name
    async fn list_participants(&self) -> Result<Vec<Participant>>;

    /// Scores ordered by creation time
    async fn list_scores(&self) -> Result<Vec<Score>>;

    /// Read contests, participants and scores as one consistent view
    async fn snapshot(&self) -> Result<Snapshot>;

    async fn insert_contest(&self, req: &NewContest) -> Result<Contest>;

    /// Delete a contest and every score recorded against it.
    /// Returns the number of scores removed by the cascade.
    async fn delete_contest(&self, contest_id: Uuid) -> Result<u64>;

    async fn insert_participant(&self, req: &ParticipantInput) -> Result<Participant>;

    /// Update name and handle, keeping id and creation time
    async fn update_participant(
        &self,
        participant_id: Uuid,
        req: &ParticipantInput,
    ) -> Result<Participant>;

    /// Delete a participant and every score they hold.
    /// Returns the number of scores removed by the cascade.
    async fn delete_participant(&self, participant_id: Uuid) -> Result<u64>;

    /// Fails with `ForeignKey` when either referenced row is missing
    async fn insert_score(&self, req: &NewScore) -> Result<Score>;

    async fn delete_score(&self, score_id: Uuid) -> Result<()>;

    /// Registered users ordered by registration time
    async fn list_leaderboard_users(&self) -> Result<Vec<LeaderboardUser>>;

    /// Fails with `ConstraintViolation` when the handle is already registered
    async fn insert_leaderboard_user(&self, req: &NewLeaderboardUser) -> Result<LeaderboardUser>;

    /// Upcoming events ordered by name
    async fn list_upcoming_events(&self) -> Result<Vec<UpcomingEvent>>;

    async fn insert_upcoming_event(&self, req: &NewUpcomingEvent) -> Result<UpcomingEvent>;
}
