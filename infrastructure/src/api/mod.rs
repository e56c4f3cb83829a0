//! Goal API client adapters

mod http_client;

pub use http_client::HttpGoalApi;
