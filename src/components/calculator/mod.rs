//! Calculator views.
//!
//! Each form keeps its field text in signals, parses on submit, and shows
//! either the computed breakdown or the validation error.

mod field;
mod sick_leave;
mod vacation;

pub use sick_leave::SickLeaveCalculator;
pub use vacation::VacationCalculator;

use crate::core::error::CalcError;
use crate::utils::parse_amount;

/// Parse a money field.
fn amount(field: &'static str, text: &str) -> Result<f64, CalcError> {
    parse_amount(text).ok_or(CalcError::NotANumber(field))
}

/// Parse a whole-number field.
fn count(field: &'static str, text: &str) -> Result<u32, CalcError> {
    text.trim().parse().map_err(|_| CalcError::NotANumber(field))
}

/// Initial text for a remembered amount; zero shows an empty field.
fn amount_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_field() {
        assert_eq!(amount("earnings", "600 000,50"), Ok(600_000.5));
        assert_eq!(amount("earnings", "x"), Err(CalcError::NotANumber("earnings")));
    }

    #[test]
    fn test_count_field() {
        assert_eq!(count("days", " 14 "), Ok(14));
        assert_eq!(count("days", "-1"), Err(CalcError::NotANumber("days")));
        assert_eq!(count("days", "1.5"), Err(CalcError::NotANumber("days")));
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(0.0), "");
        assert_eq!(amount_text(600000.0), "600000");
        assert_eq!(amount_text(1234.5), "1234.5");
    }
}
