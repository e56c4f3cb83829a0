//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; environment variables are merged on top
//! by the [`ConfigLoader`](super::ConfigLoader).

mod client;
mod database;
mod server;

pub use client::FileClientConfig;
pub use database::FileDatabaseConfig;
pub use server::{DEFAULT_PORT, FileServerConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("database.url cannot be empty")]
    EmptyDatabaseUrl,

    #[error("database.max_connections cannot be 0")]
    InvalidMaxConnections,

    #[error("client.api_url cannot be empty")]
    EmptyApiUrl,

    #[error("client.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Database settings
    pub database: FileDatabaseConfig,
    /// API client settings
    pub client: FileClientConfig,
}

impl FileConfig {
    /// Validate values that serde accepts but the application cannot use.
    ///
    /// A missing database URL is not an error here: only commands that touch
    /// the database need one, see [`FileConfig::database_url`].
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if let Some(url) = &self.database.url
            && url.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyDatabaseUrl);
        }

        if self.database.max_connections == 0 {
            return Err(ConfigValidationError::InvalidMaxConnections);
        }

        if self.client.api_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiUrl);
        }

        if self.client.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }

    /// The configured database URL, required by `serve` and `migrate`
    pub fn database_url(&self) -> Result<&str, ConfigValidationError> {
        match self.database.url.as_deref() {
            None => Err(ConfigValidationError::MissingDatabaseUrl),
            Some(url) if url.trim().is_empty() => Err(ConfigValidationError::EmptyDatabaseUrl),
            Some(url) => Ok(url),
        }
    }
}
