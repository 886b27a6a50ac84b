//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! including the statutory payroll figures the calculators depend on.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "tap-calc";

/// Id of the DOM element the application mounts into.
pub const MOUNT_ANCHOR: &str = "app";

/// Maximum log level forwarded to the browser console.
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

// =============================================================================
// Routes
// =============================================================================

/// Hash path of the vacation pay calculator.
pub const VACATION_PATH: &str = "/calc-vacation";

/// Hash path of the sick-leave benefit calculator.
pub const SICK_LEAVE_PATH: &str = "/calc-sick-leave";

use crate::models::{Route, ViewId};

/// Get the configured routes for the application.
///
/// The first route is opened when the app starts with an empty hash.
pub fn configured_routes() -> Vec<Route> {
    vec![
        Route::new(VACATION_PATH, ViewId::Vacation),
        Route::new(SICK_LEAVE_PATH, ViewId::SickLeave),
    ]
}

// =============================================================================
// Storage
// =============================================================================

/// sessionStorage keys for remembered calculator inputs.
pub mod storage {
    pub const VACATION_INPUT_KEY: &str = "vacation_input";
    pub const SICK_LEAVE_INPUT_KEY: &str = "sick_leave_input";
}

// =============================================================================
// Payroll
// =============================================================================

/// Personal income tax rate applied to both payouts.
pub const INCOME_TAX_RATE: f64 = 0.13;

/// Vacation pay constants.
pub mod vacation {
    /// Average number of calendar days in a month for the billing period.
    pub const AVG_DAYS_PER_MONTH: f64 = 29.3;
    /// Length of the billing period in months.
    pub const BILLING_MONTHS: u32 = 12;
    /// Upper bound on vacation length accepted by the form.
    pub const MAX_VACATION_DAYS: u32 = 365;
}

/// Sick-leave benefit constants.
pub mod sick_leave {
    /// Fixed divisor for the two-year billing period.
    pub const BILLING_DAYS: f64 = 730.0;
    /// Days paid by the employer before the social fund takes over.
    pub const EMPLOYER_PAID_DAYS: u32 = 3;
    /// Number of monthly minimum wages in the billing period.
    pub const MROT_MONTHS: f64 = 24.0;
    /// Upper bound on a single sick leave accepted by the form.
    pub const MAX_SICK_DAYS: u32 = 365;
    /// Upper bound on insurance record, in years.
    pub const MAX_INSURANCE_YEARS: u32 = 80;

    /// Coverage thresholds: `(minimum insurance years, share of earnings)`,
    /// checked from the top.
    pub const COVERAGE: &[(u32, f64)] = &[(8, 1.0), (5, 0.8), (0, 0.6)];

    /// Annual insurance-contribution base limit per calendar year.
    pub const BASE_LIMITS: &[(i32, f64)] = &[
        (2020, 912_000.0),
        (2021, 966_000.0),
        (2022, 1_032_000.0),
        (2023, 1_917_000.0),
        (2024, 2_225_000.0),
        (2025, 2_759_000.0),
    ];

    /// Federal monthly minimum wage (MROT) per calendar year.
    pub const MROT: &[(i32, f64)] = &[
        (2022, 15_279.0),
        (2023, 16_242.0),
        (2024, 19_242.0),
        (2025, 22_440.0),
        (2026, 27_093.0),
    ];
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
