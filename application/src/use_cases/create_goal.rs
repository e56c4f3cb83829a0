//! Create goal use case (server side)
//!
//! Validates a raw goal payload with the same rules the submission form
//! applies, then stores the new goal.

use crate::ports::goal_store::{GoalStore, GoalStoreError};
use inorbit_domain::{Goal, GoalInput, ValidationErrors};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while creating a goal
#[derive(Error, Debug)]
pub enum CreateGoalError {
    /// The payload violates the goal schema. Nothing was stored.
    #[error("Invalid goal: {0}")]
    Validation(ValidationErrors),

    /// The goal was valid but could not be stored.
    #[error("Could not store goal: {0}")]
    Store(#[from] GoalStoreError),
}

impl CreateGoalError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CreateGoalError::Validation(_))
    }
}

/// Use case for creating a goal
pub struct CreateGoalUseCase {
    store: Arc<dyn GoalStore>,
}

impl CreateGoalUseCase {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    /// Validate `input` and persist the resulting goal.
    ///
    /// # Errors
    ///
    /// - [`CreateGoalError::Validation`] - a field failed validation
    /// - [`CreateGoalError::Store`] - the store rejected the insert
    pub async fn execute(&self, input: GoalInput) -> Result<Goal, CreateGoalError> {
        let draft = input.validate().map_err(|errors| {
            warn!("Rejected goal payload: {}", errors);
            CreateGoalError::Validation(errors)
        })?;

        let goal = Goal::create(draft);
        self.store.insert(&goal).await?;

        info!(
            "Created goal {} ({}x per week)",
            goal.id, goal.desired_weekly_frequency
        );
        Ok(goal)
    }
}
