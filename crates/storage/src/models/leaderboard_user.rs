use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeaderboardUser {
    pub user_id: Uuid,
    pub full_name: String,
    pub codeforces_handle: String,
    pub leetcode_handle: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
