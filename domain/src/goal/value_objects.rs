//! Goal value objects
//!
//! [`GoalTitle`] and [`WeeklyFrequency`] can only be constructed through
//! their validating constructors, so a value of either type always satisfies
//! the goal invariants.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Message shown when the activity name is missing
pub const TITLE_REQUIRED_MESSAGE: &str = "Informe a atividade que deseja praticar";
/// Message shown when a field is absent from the payload
pub const REQUIRED_MESSAGE: &str = "Required";
/// Message shown when the frequency does not coerce to a number
pub const NAN_MESSAGE: &str = "Expected number, received nan";
/// Message shown when the frequency is a fractional number
pub const NOT_INTEGER_MESSAGE: &str = "Expected integer, received float";

/// Unique goal identifier (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(Uuid);

impl GoalId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GoalId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidGoalId(s.to_string()))
    }
}

/// The activity a goal tracks (Value Object)
///
/// Any string of at least one character is accepted. Surrounding whitespace
/// is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GoalTitle(String);

impl GoalTitle {
    /// Validate and wrap a title
    pub fn parse(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::InvalidTitle(TITLE_REQUIRED_MESSAGE.to_string()));
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for GoalTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GoalTitle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<GoalTitle> for String {
    fn from(title: GoalTitle) -> Self {
        title.0
    }
}

/// Raw title input
///
/// Anything that is not a JSON string is kept as is so validation can name
/// the type it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TitleInput {
    Text(String),
    Other(Value),
}

impl From<&str> for TitleInput {
    fn from(value: &str) -> Self {
        TitleInput::Text(value.to_string())
    }
}

impl From<String> for TitleInput {
    fn from(value: String) -> Self {
        TitleInput::Text(value)
    }
}

/// Raw, not yet coerced frequency input
///
/// Form controls and JSON clients may send the frequency as a number or as
/// its string form (`"5"`). Deserializes from any JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencyInput {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
    /// Arrays and objects
    Other(Value),
}

impl FrequencyInput {
    /// Coerce to a number the way a browser `Number(value)` call does.
    ///
    /// Returns `NaN` for text that does not describe a number.
    pub fn coerce(&self) -> f64 {
        match self {
            FrequencyInput::Number(n) => *n,
            FrequencyInput::Bool(true) => 1.0,
            FrequencyInput::Bool(false) | FrequencyInput::Null => 0.0,
            FrequencyInput::Text(text) => coerce_text(text),
            FrequencyInput::Other(value @ Value::Array(_)) => coerce_text(&js_string(value)),
            FrequencyInput::Other(_) => f64::NAN,
        }
    }
}

/// String form of a JSON value, as `String(value)` renders it inside an array
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(js_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn coerce_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // Rust accepts "inf" and "nan" spellings that a browser rejects
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned digits only. Values past `u64` keep growing instead of failing.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

impl From<f64> for FrequencyInput {
    fn from(value: f64) -> Self {
        FrequencyInput::Number(value)
    }
}

impl From<i64> for FrequencyInput {
    fn from(value: i64) -> Self {
        FrequencyInput::Number(value as f64)
    }
}

impl From<i32> for FrequencyInput {
    fn from(value: i32) -> Self {
        FrequencyInput::Number(f64::from(value))
    }
}

impl From<u8> for FrequencyInput {
    fn from(value: u8) -> Self {
        FrequencyInput::Number(f64::from(value))
    }
}

impl From<&str> for FrequencyInput {
    fn from(value: &str) -> Self {
        FrequencyInput::Text(value.to_string())
    }
}

impl From<String> for FrequencyInput {
    fn from(value: String) -> Self {
        FrequencyInput::Text(value)
    }
}

impl From<WeeklyFrequency> for FrequencyInput {
    fn from(value: WeeklyFrequency) -> Self {
        FrequencyInput::Number(f64::from(value.get()))
    }
}

/// How many times per week the activity should happen (Value Object)
///
/// Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeeklyFrequency(u8);

impl WeeklyFrequency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;
    /// Value pre-selected in a fresh form
    pub const DEFAULT: WeeklyFrequency = WeeklyFrequency(5);

    pub fn new(value: u8) -> Result<Self, DomainError> {
        Self::from_number(f64::from(value))
    }

    /// Coerce raw input and check the range.
    ///
    /// Checks run in order: not-a-number, lower bound, upper bound, integer.
    pub fn coerce(input: &FrequencyInput) -> Result<Self, DomainError> {
        Self::from_number(input.coerce())
    }

    fn from_number(value: f64) -> Result<Self, DomainError> {
        if value.is_nan() {
            return Err(DomainError::InvalidFrequency(NAN_MESSAGE.to_string()));
        }
        if value < f64::from(Self::MIN) {
            return Err(DomainError::InvalidFrequency(format!(
                "Number must be greater than or equal to {}",
                Self::MIN
            )));
        }
        if value > f64::from(Self::MAX) {
            return Err(DomainError::InvalidFrequency(format!(
                "Number must be less than or equal to {}",
                Self::MAX
            )));
        }
        if value.fract() != 0.0 {
            return Err(DomainError::InvalidFrequency(NOT_INTEGER_MESSAGE.to_string()));
        }
        Ok(Self(value as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Every selectable frequency, ascending
    pub fn all() -> impl Iterator<Item = WeeklyFrequency> {
        (Self::MIN..=Self::MAX).map(WeeklyFrequency)
    }

    /// Label shown next to the option in the frequency selector
    pub fn label(&self) -> String {
        format!("{}x na semana", self.0)
    }
}

impl Default for WeeklyFrequency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for WeeklyFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for WeeklyFrequency {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for WeeklyFrequency {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_number(f64::from(value))
    }
}

impl From<WeeklyFrequency> for u8 {
    fn from(value: WeeklyFrequency) -> Self {
        value.0
    }
}
