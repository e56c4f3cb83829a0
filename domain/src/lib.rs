//! Domain layer for in.orbit
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Goal
//!
//! A goal is an activity the user wants to practise a number of times per
//! week. Its title must not be empty and its weekly frequency is an integer
//! between 1 and 7.
//!
//! ## Goal form
//!
//! The submission form holds raw user input, validates it against the goal
//! schema and keeps one inline message per failing field.

pub mod cache;
pub mod core;
pub mod goal;

// Re-export commonly used types
pub use cache::query_key::QueryKey;
pub use core::error::DomainError;
pub use goal::{
    entities::{Goal, GoalDraft},
    form::{FrequencyOption, GoalForm},
    validation::{GoalField, GoalInput, ValidationErrors},
    value_objects::{
        FrequencyInput, GoalId, GoalTitle, NAN_MESSAGE, NOT_INTEGER_MESSAGE, REQUIRED_MESSAGE,
        TITLE_REQUIRED_MESSAGE, TitleInput, WeeklyFrequency,
    },
};
