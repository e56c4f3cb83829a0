//! Presentation-level configuration
//!
//! Settings for the HTTP surface, filled in by the binary from the loaded
//! file configuration and command-line overrides.

use serde::{Deserialize, Serialize};

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on (0 picks a free port)
    pub port: u16,
    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

impl ServerConfig {
    /// Apply command-line overrides
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ServerConfig {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors: true,
        }
    }

    #[test]
    fn test_overrides() {
        let config = base().with_overrides(None, Some(4000));
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");

        let config = base().with_overrides(Some("127.0.0.1".into()), None);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        assert_eq!(base().with_overrides(None, None), base());
    }
}
