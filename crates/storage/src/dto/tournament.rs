use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::not_blank;
use crate::models::{Contest, Participant};

/// Request payload for creating a contest
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewContest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// Request payload for creating or updating a participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParticipantInput {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Codeforces handle must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "not_blank"))]
    pub codeforces_handle: String,
}

/// Request payload for recording a score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewScore {
    pub participant_id: Uuid,
    pub contest_id: Uuid,
    #[validate(range(min = 0, message = "Points must be a non-negative integer"))]
    pub points: i32,
}

impl NewContest {
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

impl ParticipantInput {
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            codeforces_handle: self.codeforces_handle.trim().to_string(),
        }
    }
}

/// One (contest, points) pair inside a leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreDetail {
    pub contest: Contest,
    pub points: i32,
}

/// Derived per-participant row of the tournament leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub participant: Participant,
    pub scores: Vec<ScoreDetail>,
    pub total_points: i64,
}

/// Tournament leaderboard with the contest columns used to lay out the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TournamentLeaderboard {
    pub contest_names: Vec<String>,
    pub entries: Vec<LeaderboardEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_contest_name_is_rejected() {
        let req = NewContest {
            name: "   ".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let empty = NewContest {
            name: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn participant_requires_both_fields() {
        let req = ParticipantInput {
            name: "Alice".to_string(),
            codeforces_handle: String::new(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("codeforces_handle"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn negative_points_are_rejected() {
        let req = NewScore {
            participant_id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            points: -5,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("points"));

        let zero = NewScore { points: 0, ..req };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn normalized_trims_whitespace() {
        let req = ParticipantInput {
            name: "  Alice ".to_string(),
            codeforces_handle: "\ttourist\n".to_string(),
        };
        let normalized = req.normalized();
        assert_eq!(normalized.name, "Alice");
        assert_eq!(normalized.codeforces_handle, "tourist");
    }

    #[test]
    fn non_integer_points_fail_to_deserialize() {
        let payload = format!(
            r#"{{"participant_id":"{}","contest_id":"{}","points":2.5}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        assert!(serde_json::from_str::<NewScore>(&payload).is_err());
    }
}
