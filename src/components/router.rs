//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the router context follows `#/path`
//! - **One view at a time**: the outlet renders only the mounted view
//! - **Unknown paths render nothing**: no catch-all route exists
//! - **hashchange events**: browser and Telegram back buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::calculator::{SickLeaveCalculator, VacationCalculator};
use crate::models::{Location, RouteTable, ViewId};
use crate::utils::dom;

/// Redirect target for the first render: an empty hash opens the first route.
fn start_redirect(current: &Location, table: &RouteTable) -> Option<Location> {
    if !current.is_root() || table.is_empty() {
        return None;
    }
    table.first().map(|route| Location::from_hash(route.path))
}

/// Pick the hash to start from, replacing an empty one without a history entry.
fn initial_hash(ctx: AppContext) -> String {
    let current = Location::current();
    match ctx.router.with_untracked(|r| start_redirect(&current, r.table())) {
        Some(target) => {
            let hash = target.to_hash();
            dom::replace_hash(&hash);
            hash
        }
        None => current.to_hash(),
    }
}

/// Set up the hashchange listener and the platform back button.
#[cfg(target_arch = "wasm32")]
fn setup_navigation_events(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move || {
        ctx.navigate(&dom::get_hash());
    }) as Box<dyn Fn()>);

    if let Some(window) = dom::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();

    if let Err(e) = ctx.platform().on_back_button(Box::new(dom::history_back)) {
        log::debug!("back button not attached: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn setup_navigation_events(_ctx: AppContext) {}

/// Main application router.
///
/// Routes:
/// - `#/calc-vacation` → [`VacationCalculator`]
/// - `#/calc-sick-leave` → [`SickLeaveCalculator`]
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    ctx.navigate(&initial_hash(ctx));
    setup_navigation_events(ctx);

    // Show the platform back button once there is somewhere to go back to
    Effect::new(move || {
        let visible = ctx.can_go_back();
        ctx.platform().set_back_button_visible(visible);
    });

    move || match ctx.active_view.get() {
        Some(ViewId::Vacation) => view! { <VacationCalculator /> }.into_any(),
        Some(ViewId::SickLeave) => view! { <SickLeaveCalculator /> }.into_any(),
        None => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;

    #[test]
    fn test_empty_hash_redirects_to_first_route() {
        let table = RouteTable::default();
        assert_eq!(
            start_redirect(&Location::from_hash(""), &table),
            Some(Location::from_hash("/calc-vacation"))
        );
        assert_eq!(
            start_redirect(&Location::from_hash("#tgWebAppData=a%3Db&tgWebAppVersion=7.0"), &table),
            Some(Location::from_hash("/calc-vacation"))
        );
    }

    #[test]
    fn test_explicit_hash_is_kept() {
        let table = RouteTable::default();
        assert_eq!(start_redirect(&Location::from_hash("#/calc-sick-leave"), &table), None);
        assert_eq!(start_redirect(&Location::from_hash("#/unknown"), &table), None);
    }

    #[test]
    fn test_empty_table_has_no_redirect() {
        let table = RouteTable::new(Vec::<Route>::new()).unwrap();
        assert_eq!(start_redirect(&Location::root(), &table), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::sync::Arc;

    use wasm_bindgen_test::*;

    use super::*;
    use crate::core::platform::BrowserPlatform;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_initial_hash_replaces_empty_hash() {
        dom::replace_hash("#/");
        Owner::new().with(|| {
            let ctx = AppContext::new(Arc::new(BrowserPlatform), RouteTable::default());
            assert_eq!(initial_hash(ctx), "#/calc-vacation");
        });
        assert_eq!(dom::get_hash(), "#/calc-vacation");
        assert_eq!(Location::current().path(), "/calc-vacation");
    }

    #[wasm_bindgen_test]
    fn test_initial_hash_keeps_route() {
        dom::replace_hash("#/calc-sick-leave");
        Owner::new().with(|| {
            let ctx = AppContext::new(Arc::new(BrowserPlatform), RouteTable::default());
            assert_eq!(initial_hash(ctx), "#/calc-sick-leave");
        });
        assert_eq!(dom::get_hash(), "#/calc-sick-leave");
    }
}
