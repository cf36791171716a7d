//! MongoDB implementation of EventRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{Event, UpdateEvent};
use crate::repository::EventRepository;

/// MongoDB implementation of the EventRepository
pub struct MongoEventRepository {
    collection: Collection<Event>,
}

impl MongoEventRepository {
    /// Create a new MongoEventRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("events_db");
    /// let repo = MongoEventRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Event>("events");
        Self { collection }
    }

    /// Create a new MongoEventRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Event>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Event> {
        &self.collection
    }

    /// Create the indexes used by listing queries.
    ///
    /// Safe to call on every startup; MongoDB treats index creation as
    /// idempotent.
    pub async fn create_indexes(&self) -> EventResult<()> {
        let index = IndexModel::builder().keys(doc! { "start_date": 1 }).build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    fn id_filter(id: &Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn create(&self, event: Event) -> EventResult<Event> {
        self.collection.insert_one(&event).await?;

        tracing::info!(event_id = %event.id, "Event created successfully");
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &Uuid) -> EventResult<Option<Event>> {
        let event = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> EventResult<Vec<Event>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "start_date": 1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let events: Vec<Event> = cursor.try_collect().await?;

        Ok(events)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &Uuid, input: UpdateEvent) -> EventResult<Event> {
        let filter = Self::id_filter(id);
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(EventError::NotFound(*id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(event_id = %id, "Event updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &Uuid) -> EventResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(EventError::NotFound(*id));
        }

        tracing::info!(event_id = %id, "Event deleted successfully");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_serializes_uuid() {
        let id = Uuid::now_v7();
        let filter = MongoEventRepository::id_filter(&id);
        assert!(filter.contains_key("_id"));
        assert_ne!(filter.get("_id"), Some(&Bson::Null));
    }
}
