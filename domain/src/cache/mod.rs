//! Client-side query cache keys

pub mod query_key;
