//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::ViewId;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCalculator as Calculator, LuCalendarDays as Vacation, LuHeartPulse as SickLeave,
        LuPlus as Add, LuX as Remove,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCalculator as Calculator, BsCalendarCheck as Vacation, BsHeartPulse as SickLeave,
        BsPlusLg as Add, BsXLg as Remove,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CALCULATOR, Calculator);
themed_icon!(VACATION, Vacation);
themed_icon!(SICK_LEAVE, SickLeave);
themed_icon!(ADD, Add);
themed_icon!(REMOVE, Remove);

/// Icon shown next to a view in the navigation bar.
pub fn for_view(view: ViewId) -> Icon {
    match view {
        ViewId::Vacation => VACATION,
        ViewId::SickLeave => SICK_LEAVE,
    }
}
