//! Persistence client for events.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::{CreateEventDto, Event, UpdateEventDto};
use crate::Result;

/// Create/read/update/delete access to stored events.
///
/// The by-id calls resolve to `None` when no record has that id.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create(&self, data: CreateEventDto) -> Result<Event>;
    async fn find_many(&self) -> Result<Vec<Event>>;
    async fn find_unique(&self, id: &str) -> Result<Option<Event>>;
    async fn update(&self, id: &str, data: UpdateEventDto) -> Result<Option<Event>>;
    async fn delete(&self, id: &str) -> Result<Option<Event>>;
}

const EVENT_COLUMNS: &str = "id, name, date, created_at, updated_at";

/// Postgres-backed event store.
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Ids that are not UUIDs cannot name a stored event.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn create(&self, data: CreateEventDto) -> Result<Event> {
        debug!(name = %data.name, "Inserting event");
        let event = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (name, date) VALUES ($1, $2) RETURNING {EVENT_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(event)
    }

    async fn find_many(&self) -> Result<Vec<Event>> {
        debug!("Listing events");
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC, created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    async fn find_unique(&self, id: &str) -> Result<Option<Event>> {
        debug!(id, "Fetching event");
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn update(&self, id: &str, data: UpdateEventDto) -> Result<Option<Event>> {
        debug!(id, "Updating event");
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                date = COALESCE($3, date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(data.name)
        .bind(data.date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn delete(&self, id: &str) -> Result<Option<Event>> {
        debug!(id, "Deleting event");
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let event = sqlx::query_as::<_, Event>(&format!(
            "DELETE FROM events WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }
}
