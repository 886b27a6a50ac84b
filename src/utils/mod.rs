//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`dom`] - window, storage and URL hash helpers
//! - [`cache`] - sessionStorage-backed form values
//! - [`format_money`], [`parse_amount`] - ruble formatting and input parsing

pub mod cache;
pub mod dom;
mod format;

pub use format::{format_money, format_percent, parse_amount};
