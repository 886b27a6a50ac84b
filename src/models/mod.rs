//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`], [`RouteTable`], [`ViewId`] - Static hash routes
//! - [`Location`] - Normalized URL fragment
//! - [`VacationInput`], [`SickLeaveInput`] and their results - Calculator forms

mod calc;
mod location;
mod route;

pub use calc::{PartialMonth, SickLeaveInput, SickLeaveResult, VacationInput, VacationResult};
pub use location::Location;
pub use route::{Route, RouteTable, ViewId};
