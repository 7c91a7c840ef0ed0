use storage::{dto::leaderboard::RatedUser, error::Result, services::ratings};

use crate::state::AppState;

/// Registered users ranked by their current Codeforces rating.
///
/// A failing ratings provider does not fail the request: everyone is shown
/// as unrated instead.
pub async fn global_leaderboard(state: &AppState) -> Result<Vec<RatedUser>> {
    let users = ratings::list_users(state.store.as_ref()).await?;

    let ratings = match ratings::handles_query(&users) {
        Some(handles) => state
            .codeforces
            .user_info(&handles)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to fetch Codeforces ratings");
                Vec::new()
            }),
        None => Vec::new(),
    };

    Ok(ratings::rank_by_rating(users, &ratings))
}
