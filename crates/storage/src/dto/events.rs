use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewUpcomingEvent {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Event name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub date: NaiveDateTime,
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl NewUpcomingEvent {
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: trimmed(&self.description),
            location: trimmed(&self.location),
            date: self.date,
        }
    }
}
