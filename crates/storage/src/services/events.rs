use tracing::info;
use validator::Validate;

use crate::dto::events::NewUpcomingEvent;
use crate::error::Result;
use crate::models::UpcomingEvent;
use crate::store::EntityStore;

pub async fn list_upcoming_events(store: &dyn EntityStore) -> Result<Vec<UpcomingEvent>> {
    store.list_upcoming_events().await
}

pub async fn add_upcoming_event(
    store: &dyn EntityStore,
    req: &NewUpcomingEvent,
) -> Result<UpcomingEvent> {
    req.validate()?;

    let event = store.insert_upcoming_event(&req.normalized()).await?;
    info!(event_id = %event.event_id, name = %event.name, date = %event.date, "Upcoming event added");

    Ok(event)
}
