use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::not_blank;

/// Registration payload for the global rating leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewLeaderboardUser {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "not_blank"))]
    pub full_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Codeforces handle must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "not_blank"))]
    pub codeforces_handle: String,

    #[validate(length(max = 255))]
    pub leetcode_handle: Option<String>,
}

impl NewLeaderboardUser {
    pub fn normalized(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            codeforces_handle: self.codeforces_handle.trim().to_string(),
            leetcode_handle: self
                .leetcode_handle
                .as_deref()
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(String::from),
        }
    }
}

/// Rating record as reported by the Codeforces `user.info` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeforcesUser {
    pub handle: String,
    pub rating: Option<i32>,
    pub rank: Option<String>,
    pub max_rating: Option<i32>,
}

/// Leaderboard user merged with their external rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RatedUser {
    pub user_id: Uuid,
    pub full_name: String,
    pub codeforces_handle: String,
    pub leetcode_handle: Option<String>,
    pub created_at: NaiveDateTime,
    pub rating: i32,
    pub rank: String,
    pub max_rating: Option<i32>,
}
