use eventdeck_core::{
    models::{EventRecord, NewEvent, StoredAsset, UpdatedEvent},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const EVENT_COLUMNS: &str =
    "id, date, heading, description, location, link, image_url, image_id, created_at, updated_at";

/// Event record store operations.
///
/// Abstracts the persistent store so the lifecycle service can run against Postgres
/// or an in-memory implementation.
#[async_trait::async_trait]
pub trait EventStore: Send + Sync {
    /// All events, oldest first.
    async fn list(&self) -> Result<Vec<EventRecord>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<EventRecord>, AppError>;

    /// Persist a new event with the image it was created with.
    async fn insert(&self, event: &NewEvent, image: &StoredAsset) -> Result<EventRecord, AppError>;

    /// Replace every mutable column. Returns `None` if the row vanished.
    async fn update(&self, id: Uuid, event: &UpdatedEvent)
        -> Result<Option<EventRecord>, AppError>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Connectivity check used by readiness.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Repository for event records
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl EventStore for EventRepository {
    #[tracing::instrument(skip(self), fields(db.table = "events", db.operation = "select"))]
    async fn list(&self) -> Result<Vec<EventRecord>, AppError> {
        let events = sqlx::query_as::<Postgres, EventRecord>(&format!(
            "SELECT {} FROM events ORDER BY created_at ASC, id ASC",
            EVENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    #[tracing::instrument(skip(self), fields(db.table = "events", db.operation = "select", db.record_id = %id))]
    async fn get(&self, id: Uuid) -> Result<Option<EventRecord>, AppError> {
        let event = sqlx::query_as::<Postgres, EventRecord>(&format!(
            "SELECT {} FROM events WHERE id = $1",
            EVENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    #[tracing::instrument(skip(self, event), fields(db.table = "events", db.operation = "insert", image_id = %image.id))]
    async fn insert(&self, event: &NewEvent, image: &StoredAsset) -> Result<EventRecord, AppError> {
        let record = sqlx::query_as::<Postgres, EventRecord>(&format!(
            r#"
            INSERT INTO events (id, date, heading, description, location, link, image_url, image_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&event.date)
        .bind(&event.heading)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.link)
        .bind(&image.url)
        .bind(&image.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    #[tracing::instrument(skip(self, event), fields(db.table = "events", db.operation = "update", db.record_id = %id))]
    async fn update(
        &self,
        id: Uuid,
        event: &UpdatedEvent,
    ) -> Result<Option<EventRecord>, AppError> {
        let record = sqlx::query_as::<Postgres, EventRecord>(&format!(
            r#"
            UPDATE events
            SET date = $2, heading = $3, description = $4, location = $5, link = $6,
                image_url = $7, image_id = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(id)
        .bind(&event.date)
        .bind(&event.heading)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.link)
        .bind(&event.image_url)
        .bind(&event.image_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(db.table = "events", db.operation = "delete", db.record_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
