use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::tournament::{NewContest, NewScore, ParticipantInput, TournamentLeaderboard},
    models::{Contest, Participant, Score},
    services::{leaderboard, tournament},
};
use uuid::Uuid;

use crate::{error::WebError, extract::AppJson, state::AppState};

#[utoipa::path(
    get,
    path = "/api/tournament/leaderboard",
    responses(
        (status = 200, description = "Tournament leaderboard, highest total first", body = TournamentLeaderboard)
    ),
    tag = "tournament"
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<Response, WebError> {
    let board = leaderboard::get_tournament_leaderboard(state.store.as_ref()).await?;

    Ok(Json(board).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournament/contests",
    responses(
        (status = 200, description = "List all contests", body = Vec<Contest>)
    ),
    tag = "tournament"
)]
pub async fn list_contests(State(state): State<AppState>) -> Result<Response, WebError> {
    let contests = tournament::list_contests(state.store.as_ref()).await?;

    Ok(Json(contests).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournament/contests",
    request_body = NewContest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Contest created successfully", body = Contest),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournament"
)]
pub async fn add_contest(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewContest>,
) -> Result<Response, WebError> {
    let contest = tournament::add_contest(state.store.as_ref(), &req).await?;

    Ok((StatusCode::CREATED, Json(contest)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournament/contests/{id}",
    params(
        ("id" = Uuid, Path, description = "Contest ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Contest and its scores deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contest not found")
    ),
    tag = "tournament"
)]
pub async fn delete_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    tournament::delete_contest(state.store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournament/participants",
    responses(
        (status = 200, description = "List all participants ordered by name", body = Vec<Participant>)
    ),
    tag = "tournament"
)]
pub async fn list_participants(State(state): State<AppState>) -> Result<Response, WebError> {
    let participants = tournament::list_participants(state.store.as_ref()).await?;

    Ok(Json(participants).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournament/participants",
    request_body = ParticipantInput,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Participant created successfully", body = Participant),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournament"
)]
pub async fn add_participant(
    State(state): State<AppState>,
    AppJson(req): AppJson<ParticipantInput>,
) -> Result<Response, WebError> {
    let participant = tournament::add_participant(state.store.as_ref(), &req).await?;

    Ok((StatusCode::CREATED, Json(participant)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournament/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    request_body = ParticipantInput,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Participant updated successfully", body = Participant),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "tournament"
)]
pub async fn update_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<ParticipantInput>,
) -> Result<Response, WebError> {
    let participant = tournament::update_participant(state.store.as_ref(), id, &req).await?;

    Ok(Json(participant).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournament/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Participant and their scores deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "tournament"
)]
pub async fn delete_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    tournament::delete_participant(state.store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournament/scores",
    responses(
        (status = 200, description = "List all scores", body = Vec<Score>)
    ),
    tag = "tournament"
)]
pub async fn list_scores(State(state): State<AppState>) -> Result<Response, WebError> {
    let scores = tournament::list_scores(state.store.as_ref()).await?;

    Ok(Json(scores).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournament/scores",
    request_body = NewScore,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Score recorded successfully", body = Score),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Participant or contest does not exist")
    ),
    tag = "tournament"
)]
pub async fn add_score(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewScore>,
) -> Result<Response, WebError> {
    let score = tournament::add_score(state.store.as_ref(), &req).await?;

    Ok((StatusCode::CREATED, Json(score)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournament/scores/{id}",
    params(
        ("id" = Uuid, Path, description = "Score ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Score deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Score not found")
    ),
    tag = "tournament"
)]
pub async fn delete_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    tournament::delete_score(state.store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
