//! Use cases (application services)

pub mod create_goal;
pub mod list_goals;
pub mod submit_goal;
