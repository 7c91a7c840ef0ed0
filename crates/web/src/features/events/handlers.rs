use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{dto::events::NewUpcomingEvent, models::UpcomingEvent, services::events};

use crate::{error::WebError, extract::AppJson, state::AppState};

#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    responses(
        (status = 200, description = "Upcoming events ordered by name", body = Vec<UpcomingEvent>)
    ),
    tag = "events"
)]
pub async fn list_upcoming_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = events::list_upcoming_events(state.store.as_ref()).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/upcoming",
    request_body = NewUpcomingEvent,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event added successfully", body = UpcomingEvent),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn add_upcoming_event(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewUpcomingEvent>,
) -> Result<Response, WebError> {
    let event = events::add_upcoming_event(state.store.as_ref(), &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}
