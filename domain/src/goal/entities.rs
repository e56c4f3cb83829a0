//! Goal entities

use super::value_objects::{GoalId, GoalTitle, WeeklyFrequency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated goal that has not been stored yet
///
/// Only produced by [`GoalInput::validate`](super::validation::GoalInput::validate)
/// or from already-valid value objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    title: GoalTitle,
    desired_weekly_frequency: WeeklyFrequency,
}

impl GoalDraft {
    pub fn new(title: GoalTitle, desired_weekly_frequency: WeeklyFrequency) -> Self {
        Self {
            title,
            desired_weekly_frequency,
        }
    }

    pub fn title(&self) -> &GoalTitle {
        &self.title
    }

    pub fn desired_weekly_frequency(&self) -> WeeklyFrequency {
        self.desired_weekly_frequency
    }
}

/// A habit the user wants to keep up every week (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: GoalTitle,
    pub desired_weekly_frequency: WeeklyFrequency,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal from a draft, assigning an id and creation time
    pub fn create(draft: GoalDraft) -> Self {
        Self::from_draft(GoalId::generate(), draft, Utc::now())
    }

    pub fn from_draft(id: GoalId, draft: GoalDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            desired_weekly_frequency: draft.desired_weekly_frequency,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> GoalDraft {
        GoalDraft::new(
            GoalTitle::parse("Meditar").unwrap(),
            WeeklyFrequency::new(3).unwrap(),
        )
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let a = Goal::create(draft());
        let b = Goal::create(draft());
        assert_ne!(a.id, b.id);
        assert_eq!(a.title.as_str(), "Meditar");
        assert_eq!(a.desired_weekly_frequency.get(), 3);
    }

    #[test]
    fn test_goal_serializes_camel_case() {
        let goal = Goal::create(draft());
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["title"], "Meditar");
        assert_eq!(json["desiredWeeklyFrequency"], 3);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("id").is_some());
    }

    #[test]
    fn test_goal_rejects_invalid_stored_frequency() {
        let json = serde_json::json!({
            "id": GoalId::generate(),
            "title": "Ler",
            "desiredWeeklyFrequency": 9,
            "createdAt": Utc::now(),
        });
        assert!(serde_json::from_value::<Goal>(json).is_err());
    }
}
