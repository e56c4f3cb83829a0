//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod goal_api;
pub mod goal_store;
pub mod notifier;
pub mod query_cache;
