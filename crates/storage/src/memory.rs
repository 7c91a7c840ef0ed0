use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::events::NewUpcomingEvent;
use crate::dto::leaderboard::NewLeaderboardUser;
use crate::dto::tournament::{NewContest, NewScore, ParticipantInput};
use crate::error::{Result, StorageError};
use crate::models::{Contest, LeaderboardUser, Participant, Score, UpcomingEvent};
use crate::store::{EntityStore, Snapshot};

#[derive(Default)]
struct Tables {
    contests: Vec<Contest>,
    participants: Vec<Participant>,
    scores: Vec<Score>,
    users: Vec<LeaderboardUser>,
    events: Vec<UpcomingEvent>,
}

/// Name order close to a Postgres `en_US` collation: letters compare
/// case-insensitively first, then lowercase sorts before uppercase.
/// Equal names keep insertion order, which is creation order here.
fn by_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

impl Tables {
    fn participants_by_name(&self) -> Vec<Participant> {
        let mut participants = self.participants.clone();
        participants.sort_by(|a, b| by_name(&a.name, &b.name));
        participants
    }

    fn events_by_name(&self) -> Vec<UpcomingEvent> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| by_name(&a.name, &b.name));
        events
    }
}

/// Process-local store. Every mutation runs under the write lock, which makes
/// cascades atomic with respect to `snapshot`.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now() -> chrono::NaiveDateTime {
    Utc::now().naive_utc()
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_contests(&self) -> Result<Vec<Contest>> {
        Ok(self.tables.read().await.contests.clone())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>> {
        Ok(self.tables.read().await.participants_by_name())
    }

    async fn list_scores(&self) -> Result<Vec<Score>> {
        Ok(self.tables.read().await.scores.clone())
    }

    async fn snapshot(&self) -> Result<Snapshot> {
        let tables = self.tables.read().await;
        Ok(Snapshot {
            contests: tables.contests.clone(),
            participants: tables.participants_by_name(),
            scores: tables.scores.clone(),
        })
    }

    async fn insert_contest(&self, req: &NewContest) -> Result<Contest> {
        let contest = Contest {
            contest_id: Uuid::new_v4(),
            name: req.name.clone(),
            created_at: now(),
        };
        self.tables.write().await.contests.push(contest.clone());
        Ok(contest)
    }

    async fn delete_contest(&self, contest_id: Uuid) -> Result<u64> {
        let mut tables = self.tables.write().await;
        let position = tables
            .contests
            .iter()
            .position(|c| c.contest_id == contest_id)
            .ok_or(StorageError::NotFound)?;

        let before = tables.scores.len();
        tables.scores.retain(|s| s.contest_id != contest_id);
        let removed = (before - tables.scores.len()) as u64;
        tables.contests.remove(position);

        Ok(removed)
    }

    async fn insert_participant(&self, req: &ParticipantInput) -> Result<Participant> {
        let participant = Participant {
            participant_id: Uuid::new_v4(),
            name: req.name.clone(),
            codeforces_handle: req.codeforces_handle.clone(),
            created_at: now(),
        };
        self.tables
            .write()
            .await
            .participants
            .push(participant.clone());
        Ok(participant)
    }

    async fn update_participant(
        &self,
        participant_id: Uuid,
        req: &ParticipantInput,
    ) -> Result<Participant> {
        let mut tables = self.tables.write().await;
        let participant = tables
            .participants
            .iter_mut()
            .find(|p| p.participant_id == participant_id)
            .ok_or(StorageError::NotFound)?;

        participant.name = req.name.clone();
        participant.codeforces_handle = req.codeforces_handle.clone();

        Ok(participant.clone())
    }

    async fn delete_participant(&self, participant_id: Uuid) -> Result<u64> {
        let mut tables = self.tables.write().await;
        let position = tables
            .participants
            .iter()
            .position(|p| p.participant_id == participant_id)
            .ok_or(StorageError::NotFound)?;

        let before = tables.scores.len();
        tables.scores.retain(|s| s.participant_id != participant_id);
        let removed = (before - tables.scores.len()) as u64;
        tables.participants.remove(position);

        Ok(removed)
    }

    async fn insert_score(&self, req: &NewScore) -> Result<Score> {
        let mut tables = self.tables.write().await;

        if !tables
            .participants
            .iter()
            .any(|p| p.participant_id == req.participant_id)
        {
            return Err(StorageError::ForeignKey {
                entity: "participant",
                id: req.participant_id,
            });
        }
        if !tables
            .contests
            .iter()
            .any(|c| c.contest_id == req.contest_id)
        {
            return Err(StorageError::ForeignKey {
                entity: "contest",
                id: req.contest_id,
            });
        }

        let score = Score {
            score_id: Uuid::new_v4(),
            participant_id: req.participant_id,
            contest_id: req.contest_id,
            points: req.points,
            created_at: now(),
        };
        tables.scores.push(score.clone());

        Ok(score)
    }

    async fn delete_score(&self, score_id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;
        let position = tables
            .scores
            .iter()
            .position(|s| s.score_id == score_id)
            .ok_or(StorageError::NotFound)?;
        tables.scores.remove(position);
        Ok(())
    }

    async fn list_leaderboard_users(&self) -> Result<Vec<LeaderboardUser>> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn insert_leaderboard_user(&self, req: &NewLeaderboardUser) -> Result<LeaderboardUser> {
        let mut tables = self.tables.write().await;

        if tables
            .users
            .iter()
            .any(|u| u.codeforces_handle.eq_ignore_ascii_case(&req.codeforces_handle))
        {
            return Err(StorageError::ConstraintViolation(
                "Codeforces handle already registered".to_string(),
            ));
        }

        let user = LeaderboardUser {
            user_id: Uuid::new_v4(),
            full_name: req.full_name.clone(),
            codeforces_handle: req.codeforces_handle.clone(),
            leetcode_handle: req.leetcode_handle.clone(),
            created_at: now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn list_upcoming_events(&self) -> Result<Vec<UpcomingEvent>> {
        Ok(self.tables.read().await.events_by_name())
    }

    async fn insert_upcoming_event(&self, req: &NewUpcomingEvent) -> Result<UpcomingEvent> {
        let event = UpcomingEvent {
            event_id: Uuid::new_v4(),
            name: req.name.clone(),
            description: req.description.clone(),
            location: req.location.clone(),
            date: req.date,
            created_at: now(),
        };
        self.tables.write().await.events.push(event.clone());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_order_case_insensitively() {
        let mut names = vec!["bob", "Bob", "alice", "Carol"];
        names.sort_by(|a, b| by_name(a, b));
        assert_eq!(names, ["alice", "bob", "Bob", "Carol"]);
    }
}
