//! Constraint set evaluation for form values.
//!
//! # Invariants
//! - Every present constraint ANDs into the result; absent ones are skipped.
//! - Length and range bounds are exclusive (`>` / `<`).
//! - `required` inspects the trimmed text form of the value, for both text
//!   and numeric values.
//! - Length bounds apply only to text; range bounds apply only to numbers.
//! - A `max` of `0` counts as absent. `min`, `min_length` and `max_length`
//!   are honored whenever they are set, including `0`.

use std::fmt::{Display, Formatter};

/// Raw value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Coerces text to a number the way a numeric form input does.
    ///
    /// Trimmed empty text becomes `0`; text that does not parse becomes `NaN`.
    pub fn coerce_number(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Number(0.0);
        }
        Self::Number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
    }

    fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One value paired with its optional constraints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Validatable {
    /// Starts an unconstrained check for `value`.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `input.value` satisfies every constraint present.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.as_text().trim().is_empty();
    }

    if let FieldValue::Text(text) = &input.value {
        let length = text.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid = is_valid && length > min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid = is_valid && length < max_length;
        }
    }

    if let FieldValue::Number(number) = input.value {
        if let Some(min) = input.min {
            is_valid = is_valid && number > min;
        }
        if let Some(max) = input.max.filter(|max| *max != 0.0) {
            is_valid = is_valid && number < max;
        }
    }

    is_valid
}
