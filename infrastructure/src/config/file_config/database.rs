//! Database configuration from TOML (`[database]` section)

use serde::{Deserialize, Serialize};

/// Raw database configuration from TOML
///
/// `url` is normally supplied through the `DATABASE_URL` environment
/// variable rather than written to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    /// PostgreSQL connection string
    pub url: Option<String>,
    /// Upper bound of pooled connections
    pub max_connections: u32,
    /// Seconds to wait for a free connection
    pub acquire_timeout_seconds: u64,
    /// Apply pending migrations when the server starts
    pub run_migrations: bool,
}

impl Default for FileDatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            acquire_timeout_seconds: 5,
            run_migrations: true,
        }
    }
}
