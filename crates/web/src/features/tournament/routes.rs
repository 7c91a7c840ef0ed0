use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    add_contest, add_participant, add_score, delete_contest, delete_participant, delete_score,
    get_leaderboard, list_contests, list_participants, list_scores, update_participant,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/contests", post(add_contest))
        .route("/contests/:id", delete(delete_contest))
        .route("/participants", post(add_participant))
        .route(
            "/participants/:id",
            put(update_participant).delete(delete_participant),
        )
        .route("/scores", post(add_score))
        .route("/scores/:id", delete(delete_score))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/contests", get(list_contests))
        .route("/participants", get(list_participants))
        .route("/scores", get(list_scores))
        .merge(protected)
}
