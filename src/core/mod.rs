//! Core logic of the mini-app.
//!
//! This module provides:
//! - [`Router`] resolution and view swapping through a [`ViewHost`]
//! - [`calc`] vacation and sick-leave calculators
//! - [`platform`] Telegram WebApp integration

pub mod calc;
pub mod error;
pub mod platform;
mod router;

pub use platform::SharedPlatform;
pub use router::{Router, ViewHost};
