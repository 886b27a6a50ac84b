//! Sick-leave benefit from the two calendar years before the illness.

use super::{ensure_in_range, round_money};
use crate::config::INCOME_TAX_RATE;
use crate::config::sick_leave::{
    BASE_LIMITS, BILLING_DAYS, COVERAGE, EMPLOYER_PAID_DAYS, MAX_INSURANCE_YEARS, MAX_SICK_DAYS,
    MROT, MROT_MONTHS,
};
use crate::core::error::CalcError;
use crate::models::{SickLeaveInput, SickLeaveResult};

fn figure_for(table: &[(i32, f64)], year: i32) -> Result<f64, CalcError> {
    table
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, value)| *value)
        .ok_or(CalcError::UnsupportedYear(year))
}

/// Share of average earnings paid for a given insurance record.
pub fn coverage_for(insurance_years: u32) -> f64 {
    COVERAGE
        .iter()
        .find(|(min_years, _)| insurance_years >= *min_years)
        .map(|(_, share)| *share)
        .unwrap_or(0.6)
}

fn ensure_earnings(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::Negative(field))
    }
}

pub fn calculate_sick_leave(input: &SickLeaveInput) -> Result<SickLeaveResult, CalcError> {
    ensure_earnings("first year earnings", input.earnings_first_year)?;
    ensure_earnings("second year earnings", input.earnings_second_year)?;
    ensure_in_range("insurance years", input.insurance_years, 0, MAX_INSURANCE_YEARS)?;
    ensure_in_range("sick days", input.sick_days, 1, MAX_SICK_DAYS)?;

    let year = input.illness_year;
    let mrot = figure_for(MROT, year)?;
    let first_limit = figure_for(BASE_LIMITS, year - 2)?;
    let second_limit = figure_for(BASE_LIMITS, year - 1)?;

    let capped = input.earnings_first_year.min(first_limit)
        + input.earnings_second_year.min(second_limit);
    let minimum_daily = mrot * MROT_MONTHS / BILLING_DAYS;

    let mut average_daily = (capped / BILLING_DAYS).max(minimum_daily);
    // Under six months of insurance record the benefit never exceeds the minimum wage.
    if input.insurance_years == 0 {
        average_daily = average_daily.min(minimum_daily);
    }
    let average_daily = round_money(average_daily);

    let coverage = coverage_for(input.insurance_years);
    let daily_benefit = round_money(average_daily * coverage);
    let total = round_money(daily_benefit * input.sick_days as f64);
    let employer_part =
        round_money(daily_benefit * input.sick_days.min(EMPLOYER_PAID_DAYS) as f64);
    let income_tax = round_money(total * INCOME_TAX_RATE);

    Ok(SickLeaveResult {
        average_daily,
        coverage,
        daily_benefit,
        total,
        employer_part,
        fund_part: round_money(total - employer_part),
        income_tax,
        net: round_money(total - income_tax),
    })
}
