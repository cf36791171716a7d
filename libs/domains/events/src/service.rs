//! Event Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, UpdateEvent};
use crate::repository::EventRepository;

/// Event service providing business logic operations
///
/// The service layer handles validation and orchestrates repository
/// operations.
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new EventService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new event
    #[instrument(skip(self, input), fields(event_title = %input.title))]
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<Event> {
        input
            .validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        self.repository.create(Event::new(input)).await
    }

    /// Get an event by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: &Uuid) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(*id))
    }

    /// List all events ordered by start date
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        self.repository.list().await
    }

    /// Update an existing event
    #[instrument(skip(self, input))]
    pub async fn update_event(&self, id: &Uuid, input: UpdateEvent) -> EventResult<Event> {
        input
            .validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete an event
    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: &Uuid) -> EventResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
