use async_trait::async_trait;
use uuid::Uuid;

use crate::Database;
use crate::dto::events::NewUpcomingEvent;
use crate::dto::leaderboard::NewLeaderboardUser;
use crate::dto::tournament::{NewContest, NewScore, ParticipantInput};
use crate::error::Result;
use crate::models::{Contest, LeaderboardUser, Participant, Score, UpcomingEvent};
use crate::store::{EntityStore, Snapshot};

pub mod contest;
pub mod leaderboard_user;
pub mod participant;
pub mod score;
pub mod upcoming_event;

use contest::ContestRepository;
use leaderboard_user::LeaderboardUserRepository;
use participant::ParticipantRepository;
use score::ScoreRepository;
use upcoming_event::UpcomingEventRepository;

#[async_trait]
impl EntityStore for Database {
    async fn list_contests(&self) -> Result<Vec<Contest>> {
        ContestRepository::new(self.pool()).list().await
    }

    async fn list_participants(&self) -> Result<Vec<Participant>> {
        ParticipantRepository::new(self.pool()).list().await
    }

    async fn list_scores(&self) -> Result<Vec<Score>> {
        ScoreRepository::new(self.pool()).list().await
    }

    async fn snapshot(&self) -> Result<Snapshot> {
        let mut tx = self.pool().begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let contests = sqlx::query_as::<_, Contest>(contest::LIST_CONTESTS)
            .fetch_all(&mut *tx)
            .await?;
        let participants = sqlx::query_as::<_, Participant>(participant::LIST_PARTICIPANTS)
            .fetch_all(&mut *tx)
            .await?;
        let scores = sqlx::query_as::<_, Score>(score::LIST_SCORES)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Snapshot {
            contests,
            participants,
            scores,
        })
    }

    async fn insert_contest(&self, req: &NewContest) -> Result<Contest> {
        ContestRepository::new(self.pool()).create(req).await
    }

    async fn delete_contest(&self, contest_id: Uuid) -> Result<u64> {
        ContestRepository::new(self.pool()).delete(contest_id).await
    }

    async fn insert_participant(&self, req: &ParticipantInput) -> Result<Participant> {
        ParticipantRepository::new(self.pool()).create(req).await
    }

    async fn update_participant(
        &self,
        participant_id: Uuid,
        req: &ParticipantInput,
    ) -> Result<Participant> {
        ParticipantRepository::new(self.pool())
            .update(participant_id, req)
            .await
    }

    async fn delete_participant(&self, participant_id: Uuid) -> Result<u64> {
        ParticipantRepository::new(self.pool())
            .delete(participant_id)
            .await
    }

    async fn insert_score(&self, req: &NewScore) -> Result<Score> {
        ScoreRepository::new(self.pool()).create(req).await
    }

    async fn delete_score(&self, score_id: Uuid) -> Result<()> {
        ScoreRepository::new(self.pool()).delete(score_id).await
    }

    async fn list_leaderboard_users(&self) -> Result<Vec<LeaderboardUser>> {
        LeaderboardUserRepository::new(self.pool()).list().await
    }

    async fn insert_leaderboard_user(&self, req: &NewLeaderboardUser) -> Result<LeaderboardUser> {
        LeaderboardUserRepository::new(self.pool()).create(req).await
    }

    async fn list_upcoming_events(&self) -> Result<Vec<UpcomingEvent>> {
        UpcomingEventRepository::new(self.pool()).list().await
    }

    async fn insert_upcoming_event(&self, req: &NewUpcomingEvent) -> Result<UpcomingEvent> {
        UpcomingEventRepository::new(self.pool()).create(req).await
    }
}
