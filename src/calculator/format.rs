//! Number/text conversions for the calculator display and history.

use super::operations::CalcError;

/// Format a result for the display, e.g. `8` or `2.6457513110645907`.
///
/// No rounding is applied; whatever digits the float carries are shown.
pub fn display_number(value: f64) -> String {
    value.to_string()
}

/// Format an operand or result for a history line, e.g. `5.0` or `1.5`.
///
/// Integral values keep a trailing `.0` so history reads as floating-point
/// arithmetic regardless of how the number was typed.
pub fn history_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Read the current input as a finite number.
pub fn parse_input(input: &str) -> Result<f64, CalcError> {
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber(input.to_string())),
    }
}
