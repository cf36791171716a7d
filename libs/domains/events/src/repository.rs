//! Event repository trait

use crate::error::EventResult;
use crate::models::{Event, UpdateEvent};
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for event storage operations
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event
    async fn create(&self, event: Event) -> EventResult<Event>;

    /// Get event by ID
    async fn get_by_id(&self, id: &Uuid) -> EventResult<Option<Event>>;

    /// List all events ordered by start date
    async fn list(&self) -> EventResult<Vec<Event>>;

    /// Apply a partial update to an event
    async fn update(&self, id: &Uuid, input: UpdateEvent) -> EventResult<Event>;

    /// Delete event by ID
    async fn delete(&self, id: &Uuid) -> EventResult<bool>;
}
