//! Display helpers shared by presentation layers.

use cgpa_domain::NumericInput;

use crate::aggregator::AggregateResult;

/// Decimals used when no preference is configured.
pub const DEFAULT_PRECISION: usize = 2;

/// Upper bound for configurable precision.
pub const MAX_PRECISION: usize = 6;

/// Formats a CGPA rounded to `precision` decimals, ties away from zero.
///
/// `NoResult` renders as zero by convention; callers that need to tell the two
/// apart should inspect the result itself.
pub fn format_cgpa(result: AggregateResult, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let value = round_half_away(result.value().unwrap_or(0.0), precision);
    format!("{:.*}", precision, value)
}

fn round_half_away(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats a points or units total without trailing zeros.
pub fn format_number(value: f64) -> String {
    let rendered = format!("{value:.4}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Renders a numeric input, leaving unset values blank-looking.
pub fn format_input(input: NumericInput) -> String {
    match input {
        NumericInput::Unset => "-".to_string(),
        NumericInput::Value(value) => format_number(value),
    }
}

/// Two-digit, 1-based row label (`01`, `02`, ...).
pub fn position_label(position: usize) -> String {
    format!("{position:02}")
}
