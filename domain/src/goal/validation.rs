//! Goal schema validation
//!
//! [`GoalInput`] is the raw shape shared by the submission form and the
//! `POST /goals` body. [`GoalInput::validate`] checks every field and either
//! yields a [`GoalDraft`] or reports one message per failing field.

use super::entities::GoalDraft;
use super::value_objects::{
    FrequencyInput, GoalTitle, REQUIRED_MESSAGE, TitleInput, WeeklyFrequency,
};
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Fields of the goal schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoalField {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "desiredWeeklyFrequency")]
    DesiredWeeklyFrequency,
}

impl GoalField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalField::Title => "title",
            GoalField::DesiredWeeklyFrequency => "desiredWeeklyFrequency",
        }
    }
}

impl std::fmt::Display for GoalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<GoalField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message for a field wins.
    pub fn add(&mut self, field: GoalField, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: GoalField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (GoalField, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw goal input, as typed in the form or received over HTTP
///
/// `None` means the field was absent. A field sent as `null` is `Some`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalInput {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleInput>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub desired_weekly_frequency: Option<FrequencyInput>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Type name used in "Expected string, received ..." messages
fn received_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl GoalInput {
    pub fn new(
        title: impl Into<String>,
        desired_weekly_frequency: impl Into<FrequencyInput>,
    ) -> Self {
        Self {
            title: Some(TitleInput::Text(title.into())),
            desired_weekly_frequency: Some(desired_weekly_frequency.into()),
        }
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self) -> Result<GoalDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = match &self.title {
            Some(TitleInput::Text(title)) => GoalTitle::parse(title.clone()),
            Some(TitleInput::Other(value)) => Err(DomainError::InvalidTitle(format!(
                "Expected string, received {}",
                received_type(value)
            ))),
            None => Err(DomainError::InvalidTitle(REQUIRED_MESSAGE.to_string())),
        };
        let frequency = match &self.desired_weekly_frequency {
            Some(input) => WeeklyFrequency::coerce(input),
            None => Err(DomainError::InvalidFrequency(REQUIRED_MESSAGE.to_string())),
        };

        if let Err(e) = &title {
            errors.add(GoalField::Title, e.to_string());
        }
        if let Err(e) = &frequency {
            errors.add(GoalField::DesiredWeeklyFrequency, e.to_string());
        }

        match (title, frequency) {
            (Ok(title), Ok(frequency)) => Ok(GoalDraft::new(title, frequency)),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::value_objects::TITLE_REQUIRED_MESSAGE;

    #[test]
    fn test_valid_input() {
        let draft = GoalInput::new("Meditar", "3").validate().unwrap();
        assert_eq!(draft.title().as_str(), "Meditar");
        assert_eq!(draft.desired_weekly_frequency().get(), 3);
    }

    #[test]
    fn test_collects_both_errors() {
        let errors = GoalInput::new("", 9).validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(GoalField::Title), Some(TITLE_REQUIRED_MESSAGE));
        assert_eq!(
            errors.get(GoalField::DesiredWeeklyFrequency),
            Some("Number must be less than or equal to 7")
        );
    }

    #[test]
    fn test_missing_fields_are_required() {
        let errors = GoalInput::default().validate().unwrap_err();
        assert_eq!(errors.get(GoalField::Title), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get(GoalField::DesiredWeeklyFrequency), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_deserialize_camel_case_body() {
        let input: GoalInput =
            serde_json::from_str(r#"{"title":"Ler","desiredWeeklyFrequency":"5"}"#).unwrap();
        let draft = input.validate().unwrap();
        assert_eq!(draft.desired_weekly_frequency().get(), 5);
    }

    #[test]
    fn test_null_frequency_coerces_to_zero() {
        let input: GoalInput =
            serde_json::from_str(r#"{"title":"Ler","desiredWeeklyFrequency":null}"#).unwrap();
        assert_eq!(input.desired_weekly_frequency, Some(FrequencyInput::Null));

        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.get(GoalField::DesiredWeeklyFrequency),
            Some("Number must be greater than or equal to 1")
        );
    }

    #[test]
    fn test_absent_fields_stay_required() {
        let input: GoalInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, GoalInput::default());
    }

    #[test]
    fn test_wrong_title_type_reported_per_field() {
        let cases = [
            (r#"{"title":5,"desiredWeeklyFrequency":3}"#, "number"),
            (r#"{"title":null,"desiredWeeklyFrequency":3}"#, "null"),
            (r#"{"title":["Ler"],"desiredWeeklyFrequency":3}"#, "array"),
        ];
        for (body, received) in cases {
            let input: GoalInput = serde_json::from_str(body).unwrap();
            let errors = input.validate().unwrap_err();
            assert_eq!(
                errors.get(GoalField::Title),
                Some(format!("Expected string, received {received}").as_str()),
                "{body}"
            );
            assert!(errors.get(GoalField::DesiredWeeklyFrequency).is_none());
        }
    }

    #[test]
    fn test_compound_frequency_coerces() {
        let input: GoalInput =
            serde_json::from_str(r#"{"title":"Ler","desiredWeeklyFrequency":[5]}"#).unwrap();
        assert_eq!(input.validate().unwrap().desired_weekly_frequency().get(), 5);

        let input: GoalInput =
            serde_json::from_str(r#"{"title":"Ler","desiredWeeklyFrequency":{}}"#).unwrap();
        assert_eq!(
            input.validate().unwrap_err().get(GoalField::DesiredWeeklyFrequency),
            Some(crate::goal::value_objects::NAN_MESSAGE)
        );
    }

    #[test]
    fn test_errors_serialize_by_wire_name() {
        let mut errors = ValidationErrors::new();
        errors.add(GoalField::DesiredWeeklyFrequency, "bad");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"desiredWeeklyFrequency": "bad"}));
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(GoalField::Title, "first");
        errors.add(GoalField::Title, "second");
        assert_eq!(errors.get(GoalField::Title), Some("first"));
        assert_eq!(errors.to_string(), "title: first");
    }
}
