use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Contest {
    pub contest_id: Uuid,
    pub name: String,
    pub created_at: chrono::NaiveDateTime,
}
