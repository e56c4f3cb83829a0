//! Goal submission form state
//!
//! Holds what the user has typed so far, plus the inline error shown under
//! each field after a submit attempt. The form never talks to the network;
//! submission is driven by the application layer.

use super::entities::GoalDraft;
use super::validation::{GoalField, GoalInput, ValidationErrors};
use super::value_objects::{FrequencyInput, TitleInput, WeeklyFrequency};

/// One entry of the weekly frequency selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyOption {
    pub value: WeeklyFrequency,
    pub label: String,
    pub selected: bool,
}

/// Form bound to the goal schema
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    title: String,
    desired_weekly_frequency: FrequencyInput,
    errors: ValidationErrors,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            desired_weekly_frequency: WeeklyFrequency::DEFAULT.into(),
            errors: ValidationErrors::new(),
        }
    }
}

impl GoalForm {
    /// A fresh form: empty title, frequency pre-selected to the default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn desired_weekly_frequency(&self) -> &FrequencyInput {
        &self.desired_weekly_frequency
    }

    pub fn set_desired_weekly_frequency(&mut self, value: impl Into<FrequencyInput>) {
        self.desired_weekly_frequency = value.into();
    }

    /// Current values as raw schema input
    pub fn input(&self) -> GoalInput {
        GoalInput {
            title: Some(TitleInput::Text(self.title.clone())),
            desired_weekly_frequency: Some(self.desired_weekly_frequency.clone()),
        }
    }

    /// Validate the current values.
    ///
    /// Replaces the inline errors with the outcome of this run.
    pub fn validate(&mut self) -> Result<GoalDraft, ValidationErrors> {
        self.errors.clear();
        self.input().validate().inspect_err(|errors| {
            self.errors = errors.clone();
        })
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Inline message for a field, if the last validation failed on it
    pub fn error(&self, field: GoalField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Return every field to its initial value and drop inline errors
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selector entries, with the current value marked
    pub fn frequency_options(&self) -> Vec<FrequencyOption> {
        let current = self.desired_weekly_frequency.coerce();
        WeeklyFrequency::all()
            .map(|value| FrequencyOption {
                label: value.label(),
                selected: current == f64::from(value.get()),
                value,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::value_objects::TITLE_REQUIRED_MESSAGE;

    #[test]
    fn test_new_form_defaults() {
        let form = GoalForm::new();
        assert_eq!(form.title(), "");
        assert_eq!(form.desired_weekly_frequency().coerce(), 5.0);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_validate_sets_inline_error() {
        let mut form = GoalForm::new();
        assert!(form.validate().is_err());
        assert_eq!(form.error(GoalField::Title), Some(TITLE_REQUIRED_MESSAGE));
        assert!(form.error(GoalField::DesiredWeeklyFrequency).is_none());

        form.set_title("Correr");
        let draft = form.validate().unwrap();
        assert_eq!(draft.desired_weekly_frequency().get(), 5);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_reset_restores_default_frequency() {
        for value in WeeklyFrequency::all() {
            let mut form = GoalForm::new();
            form.set_title("Nadar");
            form.set_desired_weekly_frequency(value);
            form.reset();
            assert_eq!(form, GoalForm::new());
        }
    }

    #[test]
    fn test_frequency_options_mark_selection() {
        let mut form = GoalForm::new();
        form.set_desired_weekly_frequency("2");
        let options = form.frequency_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].label, "1x na semana");
        let selected: Vec<u8> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.get())
            .collect();
        assert_eq!(selected, vec![2]);
    }
}
