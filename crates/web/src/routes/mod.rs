use axum::Router;

use crate::features::{events, leaderboard, tournament};
use crate::middleware::auth::ApiKeys;
use crate::state::AppState;


pub fn router(state: AppState, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest("/api/tournament", tournament::routes::routes(api_keys.clone()))
        .nest("/api/events", events::routes::routes(api_keys))
        .nest("/api/leaderboard", leaderboard::routes::routes())
        .with_state(state)
}
