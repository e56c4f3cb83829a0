//! Infrastructure layer for in.orbit
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod api;
pub mod cache;
pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use api::HttpGoalApi;
pub use cache::{CacheEntry, InMemoryQueryCache};
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_PORT, FileClientConfig, FileConfig,
    FileDatabaseConfig, FileServerConfig,
};
pub use persistence::PgGoalStore;
