//! Custom error types for the application.
//!
//! One error type per domain:
//!
//! - [`RouteError`] - route table construction
//! - [`ShellError`] - application mount
//! - [`PlatformError`] - Telegram WebApp calls
//! - [`CalcError`] - calculator input validation

use thiserror::Error;

/// Route table construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two routes share the same path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    /// Route path does not start with '/'.
    #[error("route path must start with '/': {0}")]
    InvalidPath(String),
}

/// Errors raised while mounting the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Browser window or document not available
    #[error("Browser window not available")]
    NoWindow,
    /// Mount point missing from the page
    #[error("mount anchor #{0} not found")]
    AnchorNotFound(String),
}

/// Host platform (Telegram WebApp) errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// Running outside the Telegram client
    #[error("Telegram WebApp not available")]
    Unavailable,
    /// A WebApp method could not be reached or invoked
    #[error("WebApp call failed: {0}")]
    CallFailed(String),
}

/// Calculator input errors, displayed next to the form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{0} is not a number")]
    NotANumber(&'static str),
    #[error("{0} must be a positive amount")]
    NotPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    #[error("partial month: worked {worked} of {calendar} days is not a valid month")]
    InvalidPartialMonth { worked: u32, calendar: u32 },
    #[error("billing period exceeds 12 months")]
    BillingPeriodTooLong,
    #[error("billing period is empty")]
    EmptyBillingPeriod,
    #[error("no statutory figures for {0}")]
    UnsupportedYear(i32),
}
