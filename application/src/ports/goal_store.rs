//! Goal storage port
//!
//! Defines how the application persists and reads goals.

use async_trait::async_trait;
use inorbit_domain::Goal;
use thiserror::Error;

/// Errors that can occur in a goal store
#[derive(Error, Debug)]
pub enum GoalStoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Stored goal is invalid: {0}")]
    Corrupt(String),
}

/// Persistence for goals
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Persist a newly created goal
    async fn insert(&self, goal: &Goal) -> Result<(), GoalStoreError>;

    /// All stored goals, oldest first
    async fn list(&self) -> Result<Vec<Goal>, GoalStoreError>;
}
