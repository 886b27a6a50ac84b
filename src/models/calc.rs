//! Calculator inputs and results.

use serde::{Deserialize, Serialize};

/// A month of the billing period that was not fully worked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMonth {
    pub worked_days: u32,
    pub calendar_days: u32,
}

/// Vacation pay form values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VacationInput {
    /// Total accrued pay over the billing period.
    pub earnings: f64,
    /// Fully worked months of the billing period.
    pub full_months: u32,
    #[serde(default)]
    pub partial_months: Vec<PartialMonth>,
    pub vacation_days: u32,
}

impl Default for VacationInput {
    fn default() -> Self {
        Self {
            earnings: 0.0,
            full_months: 12,
            partial_months: Vec::new(),
            vacation_days: 14,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VacationResult {
    pub billing_days: f64,
    pub average_daily: f64,
    pub gross: f64,
    pub income_tax: f64,
    pub net: f64,
}

/// Sick-leave form values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SickLeaveInput {
    pub illness_year: i32,
    /// Earnings in the year two years before the illness.
    pub earnings_first_year: f64,
    /// Earnings in the year before the illness.
    pub earnings_second_year: f64,
    pub insurance_years: u32,
    pub sick_days: u32,
}

impl Default for SickLeaveInput {
    fn default() -> Self {
        Self {
            illness_year: 2025,
            earnings_first_year: 0.0,
            earnings_second_year: 0.0,
            insurance_years: 8,
            sick_days: 7,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SickLeaveResult {
    pub average_daily: f64,
    /// Share of average earnings paid, from 0.6 to 1.0.
    pub coverage: f64,
    pub daily_benefit: f64,
    pub total: f64,
    pub employer_part: f64,
    pub fund_part: f64,
    pub income_tax: f64,
    pub net: f64,
}
