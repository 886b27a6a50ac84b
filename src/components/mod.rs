//! UI components built with Leptos.
//!
//! - [`router`] - Hash router outlet (main entry point)
//! - [`nav`] - Navigation bar linking the calculators
//! - [`calculator`] - Vacation and sick-leave forms
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod calculator;
pub mod icons;
pub mod nav;
pub mod router;

pub use nav::NavBar;
pub use router::AppRouter;
