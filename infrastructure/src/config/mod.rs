//! Configuration loading for in.orbit
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`DATABASE_URL`, `INORBIT_*`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./inorbit.toml` or `./.inorbit.toml`
//! 4. Global: `$XDG_CONFIG_HOME/inorbit/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_PORT, FileClientConfig, FileConfig, FileDatabaseConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
