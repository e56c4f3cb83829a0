//! Client-side query cache adapters

mod memory;

pub use memory::{CacheEntry, InMemoryQueryCache};
