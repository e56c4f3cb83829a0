//! Goal subdomain.
//!
//! - [`entities::Goal`] — a stored habit with its weekly target
//! - [`value_objects`] — title, weekly frequency and raw frequency input
//! - [`validation`] — schema validation of raw input
//! - [`form::GoalForm`] — client-side submission form state

pub mod entities;
pub mod form;
pub mod validation;
pub mod value_objects;
