use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UpcomingEvent {
    pub event_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: chrono::NaiveDateTime,
    pub created_at: chrono::NaiveDateTime,
}
