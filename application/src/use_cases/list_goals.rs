//! List goals use case

use crate::ports::goal_store::{GoalStore, GoalStoreError};
use inorbit_domain::Goal;
use std::sync::Arc;
use tracing::debug;

/// Use case for reading every stored goal
pub struct ListGoalsUseCase {
    store: Arc<dyn GoalStore>,
}

impl ListGoalsUseCase {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    /// All goals, oldest first
    pub async fn execute(&self) -> Result<Vec<Goal>, GoalStoreError> {
        let goals = self.store.list().await?;
        debug!("Listed {} goals", goals.len());
        Ok(goals)
    }
}
