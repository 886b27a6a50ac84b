//! Payroll calculators.
//!
//! Pure functions over the form inputs in [`crate::models`]; every reported
//! money figure is rounded to kopecks.

mod sick_leave;
mod vacation;

pub use sick_leave::calculate_sick_leave;
pub use vacation::calculate_vacation;

use crate::core::error::CalcError;

/// Round a money amount to two decimal places.
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn ensure_in_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), CalcError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::OutOfRange { field, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(1706.4846), 1706.48);
        assert_eq!(round_money(0.005), 0.01);
        assert_eq!(round_money(42.0), 42.0);
    }

    #[test]
    fn test_ensure_in_range() {
        assert!(ensure_in_range("days", 1, 1, 365).is_ok());
        assert!(ensure_in_range("days", 365, 1, 365).is_ok());
        assert_eq!(
            ensure_in_range("days", 0, 1, 365),
            Err(CalcError::OutOfRange {
                field: "days",
                min: 1,
                max: 365
            })
        );
    }
}
