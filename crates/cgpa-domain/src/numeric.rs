//! Lenient numeric inputs that remember whether a value was ever entered.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
/// A numeric field that may be left blank.
///
/// `Unset` resolves to `0.0` in arithmetic but renders differently from an
/// explicit zero.
pub enum NumericInput {
    #[default]
    Unset,
    Value(f64),
}

impl NumericInput {
    /// Coerces raw text into a numeric input.
    ///
    /// Blank, non-numeric and non-finite text all become `Unset`; nothing is
    /// rejected. Signs and fractions are kept as typed.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumericInput::Unset;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => NumericInput::Value(value),
            _ => NumericInput::Unset,
        }
    }

    pub fn resolve(self) -> f64 {
        match self {
            NumericInput::Unset => 0.0,
            NumericInput::Value(value) => value,
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, NumericInput::Unset)
    }

    pub fn value(self) -> Option<f64> {
        match self {
            NumericInput::Unset => None,
            NumericInput::Value(value) => Some(value),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            NumericInput::Value(value)
        } else {
            NumericInput::Unset
        }
    }
}

impl From<Option<f64>> for NumericInput {
    fn from(value: Option<f64>) -> Self {
        value.map(NumericInput::from).unwrap_or_default()
    }
}

impl From<NumericInput> for Option<f64> {
    fn from(value: NumericInput) -> Self {
        value.value()
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Unset => f.write_str("-"),
            NumericInput::Value(value) => write!(f, "{value}"),
        }
    }
}
