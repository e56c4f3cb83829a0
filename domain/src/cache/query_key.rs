//! Query cache key value object

use serde::{Deserialize, Serialize};

/// Identifies a cached query on the client
///
/// The keys are opaque: the queries behind them live outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryKey {
    PendingGoals,
    Summary,
}

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::PendingGoals => "pending-goals",
            QueryKey::Summary => "summary",
        }
    }

    /// Keys whose data goes stale once a goal has been created
    pub fn invalidated_by_goal_creation() -> [QueryKey; 2] {
        [QueryKey::PendingGoals, QueryKey::Summary]
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
