use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{add_upcoming_event, list_upcoming_events};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/upcoming", post(add_upcoming_event))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/upcoming", get(list_upcoming_events))
        .merge(protected)
}
