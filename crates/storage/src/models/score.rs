use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Points earned by one participant in one contest. Several rows may exist
/// for the same pair; they add up on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub participant_id: Uuid,
    pub contest_id: Uuid,
    pub points: i32,
    pub created_at: chrono::NaiveDateTime,
}
