//! Client configuration from TOML (`[client]` section)

use serde::{Deserialize, Serialize};

/// Raw API client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of the goal API
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            api_url: format!("http://localhost:{}", super::server::DEFAULT_PORT),
            timeout_seconds: 10,
        }
    }
}
