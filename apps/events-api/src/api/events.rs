//! Events API routes
//!
//! Wires the events domain to MongoDB.

use crate::state::AppState;
use axum::Router;
use domain_events::{EventService, MongoEventRepository, handlers};
use mongodb::Database;

/// Create the events router backed by MongoDB
pub fn router(state: &AppState) -> Router {
    let repository = MongoEventRepository::new(state.db.clone());
    let service = EventService::new(repository);

    handlers::router(service)
}

/// Ensure the indexes used by listing queries exist.
///
/// Called once on startup, before the server accepts traffic.
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    let repository = MongoEventRepository::new(db.clone());
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;

    tracing::info!("Event indexes ready");
    Ok(())
}
