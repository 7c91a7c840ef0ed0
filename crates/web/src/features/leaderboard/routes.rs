use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_global_leaderboard, register_user};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/global", get(get_global_leaderboard))
        .route("/users", post(register_user))
}
