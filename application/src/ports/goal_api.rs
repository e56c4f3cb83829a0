//! Goal API port
//!
//! The client side's view of the goal creation endpoint.

use async_trait::async_trait;
use inorbit_domain::{Goal, GoalDraft};
use thiserror::Error;

/// Errors that can occur while calling the goal API
#[derive(Error, Debug)]
pub enum GoalApiError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Remote goal creation
#[async_trait]
pub trait GoalApi: Send + Sync {
    /// Ask the server to create a goal from an already validated draft
    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal, GoalApiError>;
}
