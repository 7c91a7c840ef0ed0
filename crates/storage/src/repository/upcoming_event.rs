use sqlx::PgPool;

use crate::dto::events::NewUpcomingEvent;
use crate::error::Result;
use crate::models::UpcomingEvent;

pub struct UpcomingEventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UpcomingEventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<UpcomingEvent>> {
        let events = sqlx::query_as::<_, UpcomingEvent>(
            r#"
            SELECT event_id, name, description, location, date, created_at
            FROM upcoming_events
            ORDER BY name ASC, created_at ASC, event_id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn create(&self, req: &NewUpcomingEvent) -> Result<UpcomingEvent> {
        let event = sqlx::query_as::<_, UpcomingEvent>(
            r#"
            INSERT INTO upcoming_events (name, description, location, date)
            VALUES ($1, $2, $3, $4)
            RETURNING event_id, name, description, location, date, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.location)
        .bind(req.date)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }
}
