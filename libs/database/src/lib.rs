//! Database library providing a MongoDB connector and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb::{connect_from_config, MongoConfig};
//!
//! let client = connect_from_config(&MongoConfig::default()).await?;
//! let db = client.database("events_db");
//! let collection = db.collection::<Document>("events");
//! ```

// Always available modules
pub mod common;

// Database-specific modules (conditional based on features)
#[cfg(feature = "mongodb")]
pub mod mongodb;
