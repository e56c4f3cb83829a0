//! Application layer for in.orbit
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    goal_api::{GoalApi, GoalApiError},
    goal_store::{GoalStore, GoalStoreError},
    notifier::{NoToasts, ToastNotifier},
    query_cache::QueryCache,
};
pub use use_cases::create_goal::{CreateGoalError, CreateGoalUseCase};
pub use use_cases::list_goals::ListGoalsUseCase;
pub use use_cases::submit_goal::{
    GOAL_CREATE_FAILED_MESSAGE, GOAL_CREATED_MESSAGE, SubmitGoalUseCase, SubmitOutcome,
};
