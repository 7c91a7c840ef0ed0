use std::collections::HashMap;

use tracing::info;
use validator::Validate;

use crate::dto::leaderboard::{CodeforcesUser, NewLeaderboardUser, RatedUser};
use crate::error::Result;
use crate::models::LeaderboardUser;
use crate::store::EntityStore;

const UNRATED: &str = "unrated";

/// Handles joined the way the Codeforces `user.info` endpoint expects them,
/// or `None` when there is nobody to look up.
pub fn handles_query(users: &[LeaderboardUser]) -> Option<String> {
    if users.is_empty() {
        return None;
    }

    Some(
        users
            .iter()
            .map(|u| u.codeforces_handle.as_str())
            .collect::<Vec<_>>()
            .join(";"),
    )
}

/// Attach ratings to users and order them by rating, highest first.
///
/// Handles match case-insensitively. Users with no rating record are rated 0
/// and ranked "unrated". Ties keep registration order.
pub fn rank_by_rating(users: Vec<LeaderboardUser>, ratings: &[CodeforcesUser]) -> Vec<RatedUser> {
    let by_handle: HashMap<String, &CodeforcesUser> = ratings
        .iter()
        .map(|r| (r.handle.to_lowercase(), r))
        .collect();

    let mut rated: Vec<RatedUser> = users
        .into_iter()
        .map(|user| {
            let record = by_handle.get(&user.codeforces_handle.to_lowercase());

            RatedUser {
                rating: record.and_then(|r| r.rating).unwrap_or(0),
                rank: record
                    .and_then(|r| r.rank.clone())
                    .unwrap_or_else(|| UNRATED.to_string()),
                max_rating: record.and_then(|r| r.max_rating),
                user_id: user.user_id,
                full_name: user.full_name,
                codeforces_handle: user.codeforces_handle,
                leetcode_handle: user.leetcode_handle,
                created_at: user.created_at,
            }
        })
        .collect();

    rated.sort_by(|a, b| b.rating.cmp(&a.rating));

    rated
}

/// Registered users in registration order
pub async fn list_users(store: &dyn EntityStore) -> Result<Vec<LeaderboardUser>> {
    store.list_leaderboard_users().await
}

pub async fn register_user(
    store: &dyn EntityStore,
    req: &NewLeaderboardUser,
) -> Result<LeaderboardUser> {
    req.validate()?;

    let user = store.insert_leaderboard_user(&req.normalized()).await?;
    info!(user_id = %user.user_id, handle = %user.codeforces_handle, "Leaderboard user registered");

    Ok(user)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn user(handle: &str) -> LeaderboardUser {
        LeaderboardUser {
            user_id: Uuid::new_v4(),
            full_name: handle.to_uppercase(),
            codeforces_handle: handle.to_string(),
            leetcode_handle: None,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
        }
    }

    fn record(handle: &str, rating: i32) -> CodeforcesUser {
        CodeforcesUser {
            handle: handle.to_string(),
            rating: Some(rating),
            rank: Some("expert".to_string()),
            max_rating: Some(rating + 100),
        }
    }

    #[test]
    fn handles_are_joined_with_semicolons() {
        let users = vec![user("alice"), user("bob")];
        assert_eq!(handles_query(&users).as_deref(), Some("alice;bob"));
        assert_eq!(handles_query(&[]), None);
    }

    #[test]
    fn ratings_match_case_insensitively() {
        let rated = rank_by_rating(vec![user("Tourist")], &[record("tourist", 3500)]);

        assert_eq!(rated[0].rating, 3500);
        assert_eq!(rated[0].max_rating, Some(3600));
        assert_eq!(rated[0].rank, "expert");
        assert_eq!(rated[0].codeforces_handle, "Tourist");
    }

    #[test]
    fn missing_ratings_fall_back_to_unrated() {
        let rated = rank_by_rating(vec![user("ghost")], &[]);

        assert_eq!(rated[0].rating, 0);
        assert_eq!(rated[0].rank, "unrated");
        assert_eq!(rated[0].max_rating, None);
    }

    #[test]
    fn users_sorted_by_rating_with_stable_ties() {
        let users = vec![user("a"), user("b"), user("c"), user("d")];
        let ratings = [record("b", 1500), record("c", 1900), record("d", 1500)];

        let rated = rank_by_rating(users, &ratings);
        let order: Vec<&str> = rated.iter().map(|u| u.codeforces_handle.as_str()).collect();

        assert_eq!(order, ["c", "b", "d", "a"]);
    }
}
