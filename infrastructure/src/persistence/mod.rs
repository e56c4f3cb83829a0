//! Goal persistence adapters

mod postgres;

pub use postgres::PgGoalStore;
