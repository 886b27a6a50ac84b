//! Vacation pay from the 12-month billing period.

use super::{ensure_in_range, round_money};
use crate::config::INCOME_TAX_RATE;
use crate::config::vacation::{AVG_DAYS_PER_MONTH, BILLING_MONTHS, MAX_VACATION_DAYS};
use crate::core::error::CalcError;
use crate::models::{PartialMonth, VacationInput, VacationResult};

/// Number of billing days credited for the worked part of the period.
///
/// Full months count as 29.3 days; a partial month counts proportionally
/// to the calendar days actually worked.
pub fn billing_days(full_months: u32, partial_months: &[PartialMonth]) -> Result<f64, CalcError> {
    ensure_in_range("full months", full_months, 0, BILLING_MONTHS)?;
    if full_months as usize + partial_months.len() > BILLING_MONTHS as usize {
        return Err(CalcError::BillingPeriodTooLong);
    }

    let mut days = full_months as f64 * AVG_DAYS_PER_MONTH;
    for month in partial_months {
        let valid = (28..=31).contains(&month.calendar_days)
            && month.worked_days > 0
            && month.worked_days <= month.calendar_days;
        if !valid {
            return Err(CalcError::InvalidPartialMonth {
                worked: month.worked_days,
                calendar: month.calendar_days,
            });
        }
        days += AVG_DAYS_PER_MONTH * month.worked_days as f64 / month.calendar_days as f64;
    }

    if days <= 0.0 {
        return Err(CalcError::EmptyBillingPeriod);
    }
    Ok(days)
}

pub fn calculate_vacation(input: &VacationInput) -> Result<VacationResult, CalcError> {
    if !input.earnings.is_finite() || input.earnings <= 0.0 {
        return Err(CalcError::NotPositive("earnings"));
    }
    ensure_in_range("vacation days", input.vacation_days, 1, MAX_VACATION_DAYS)?;

    let billing_days = billing_days(input.full_months, &input.partial_months)?;
    let average_daily = round_money(input.earnings / billing_days);
    let gross = round_money(average_daily * input.vacation_days as f64);
    let income_tax = round_money(gross * INCOME_TAX_RATE);

    Ok(VacationResult {
        billing_days,
        average_daily,
        gross,
        income_tax,
        net: round_money(gross - income_tax),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn input(earnings: f64, full_months: u32, vacation_days: u32) -> VacationInput {
        VacationInput {
            earnings,
            full_months,
            partial_months: Vec::new(),
            vacation_days,
        }
    }

    #[test]
    fn test_full_year() {
        let result = calculate_vacation(&input(600_000.0, 12, 14)).unwrap();
        assert!(approx(result.billing_days, 351.6));
        assert!(approx(result.average_daily, 1706.48));
        assert!(approx(result.gross, 23890.72));
        assert!(approx(result.income_tax, 3105.79));
        assert!(approx(result.net, 20784.93));
    }

    #[test]
    fn test_partial_month_counts_proportionally() {
        let partial = [PartialMonth {
            worked_days: 15,
            calendar_days: 30,
        }];
        let days = billing_days(11, &partial).unwrap();
        assert!(approx(days, 336.95));
    }

    #[test]
    fn test_only_partial_months() {
        let partial = [PartialMonth {
            worked_days: 31,
            calendar_days: 31,
        }];
        assert!(approx(billing_days(0, &partial).unwrap(), 29.3));
    }

    #[test]
    fn test_empty_period_rejected() {
        assert_eq!(billing_days(0, &[]), Err(CalcError::EmptyBillingPeriod));
    }

    #[test]
    fn test_period_too_long() {
        let partial = [PartialMonth {
            worked_days: 10,
            calendar_days: 30,
        }];
        assert_eq!(
            billing_days(12, &partial),
            Err(CalcError::BillingPeriodTooLong)
        );
        assert!(matches!(
            billing_days(13, &[]),
            Err(CalcError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_partial_month() {
        for (worked, calendar) in [(0, 30), (31, 30), (10, 27), (10, 32)] {
            let partial = [PartialMonth {
                worked_days: worked,
                calendar_days: calendar,
            }];
            assert_eq!(
                billing_days(6, &partial),
                Err(CalcError::InvalidPartialMonth { worked, calendar })
            );
        }
    }

    #[test]
    fn test_invalid_earnings() {
        assert_eq!(
            calculate_vacation(&input(0.0, 12, 14)),
            Err(CalcError::NotPositive("earnings"))
        );
        assert_eq!(
            calculate_vacation(&input(f64::NAN, 12, 14)),
            Err(CalcError::NotPositive("earnings"))
        );
    }

    #[test]
    fn test_vacation_days_range() {
        assert!(matches!(
            calculate_vacation(&input(600_000.0, 12, 0)),
            Err(CalcError::OutOfRange { field: "vacation days", .. })
        ));
        assert!(calculate_vacation(&input(600_000.0, 12, 365)).is_ok());
    }
}
