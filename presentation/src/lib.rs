//! Presentation layer for in.orbit
//!
//! This crate contains the HTTP API surface, CLI definitions,
//! console formatters and the console toast notifier.

pub mod cli;
pub mod config;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::ServerConfig;
pub use http::{ApiError, ApiState, HttpServer, create_router};
pub use output::console::ConsoleFormatter;
pub use output::toast::ConsoleToaster;
