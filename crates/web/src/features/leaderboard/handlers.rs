use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::leaderboard::{NewLeaderboardUser, RatedUser},
    models::LeaderboardUser,
    services::ratings,
};

use crate::{error::WebError, extract::AppJson, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard/global",
    responses(
        (status = 200, description = "Registered users ordered by Codeforces rating", body = Vec<RatedUser>)
    ),
    tag = "leaderboard"
)]
pub async fn get_global_leaderboard(State(state): State<AppState>) -> Result<Response, WebError> {
    let users = services::global_leaderboard(&state).await?;

    Ok(Json(users).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leaderboard/users",
    request_body = NewLeaderboardUser,
    responses(
        (status = 201, description = "User registered successfully", body = LeaderboardUser),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Codeforces handle already registered")
    ),
    tag = "leaderboard"
)]
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewLeaderboardUser>,
) -> Result<Response, WebError> {
    let user = ratings::register_user(state.store.as_ref(), &req).await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}
