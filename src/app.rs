//! Root application module.
//!
//! Contains the [`AppShell`] that performs the one-time mount, the
//! [`AppContext`] shared through the component tree, and the root [`App`]
//! component.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{AppRouter, NavBar};
use crate::core::error::ShellError;
use crate::core::{Router, SharedPlatform, ViewHost};
use crate::models::{RouteTable, ViewId};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Forwards router lifecycle calls into the active-view signal.
struct SignalHost(RwSignal<Option<ViewId>>);

impl ViewHost for SignalHost {
    fn mount(&mut self, view: ViewId) {
        self.0.set(Some(view));
    }

    fn unmount(&mut self, _view: ViewId) {
        self.0.set(None);
    }
}

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. The router is the navigation context:
/// the current location lives inside it rather than in a global.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles to the underlying reactive state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route table, current location and mounted view.
    pub router: RwSignal<Router>,
    /// View rendered by the router outlet.
    pub active_view: RwSignal<Option<ViewId>>,
    /// Injected host platform capability.
    pub platform: StoredValue<SharedPlatform>,
}

impl AppContext {
    pub fn new(platform: SharedPlatform, routes: RouteTable) -> Self {
        Self {
            router: RwSignal::new(Router::new(routes)),
            active_view: RwSignal::new(None),
            platform: StoredValue::new(platform),
        }
    }

    /// Route to a URL hash and update the mounted view.
    pub fn navigate(&self, hash: &str) {
        let mut host = SignalHost(self.active_view);
        self.router.update(|router| {
            router.navigate(hash, &mut host);
        });
    }

    /// Whether the in-app history has an entry to go back to.
    pub fn can_go_back(&self) -> bool {
        self.router.with(|r| r.history_depth() > 1)
    }

    pub fn platform(&self) -> SharedPlatform {
        self.platform.get_value()
    }
}

// ============================================================================
// AppShell
// ============================================================================

/// One-time application bootstrap.
///
/// The platform capability is passed in by the caller; [`AppShell::mount`]
/// consumes the shell so it can only mount once.
pub struct AppShell {
    platform: SharedPlatform,
    routes: RouteTable,
}

impl AppShell {
    pub fn new(platform: SharedPlatform) -> Self {
        Self {
            platform,
            routes: RouteTable::default(),
        }
    }

    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Mount the application into the element with id `anchor`.
    pub fn mount(self, anchor: &str) -> Result<(), ShellError> {
        let document = dom::window()
            .and_then(|w| w.document())
            .ok_or(ShellError::NoWindow)?;
        let root = document
            .get_element_by_id(anchor)
            .ok_or_else(|| ShellError::AnchorNotFound(anchor.to_string()))?
            .unchecked_into::<web_sys::HtmlElement>();

        let Self { platform, routes } = self;
        platform.expand();
        dom::set_root_attribute("data-theme", platform.color_scheme().as_str());
        log::info!(
            "mounting into #{} on {} with {} routes",
            anchor,
            platform.name(),
            routes.len()
        );

        let ready = platform.clone();
        mount_to(root, move || view! { <App platform=platform routes=routes /> }).forget();
        ready.ready();
        Ok(())
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the navigation bar and the router outlet
#[component]
pub fn App(platform: SharedPlatform, routes: RouteTable) -> impl IntoView {
    let ctx = AppContext::new(platform, routes);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1>"Something went wrong"</h1>
                    <p>"Please close and reopen the app."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload"
                    </button>
                </div>
            }
        >
            <div class=css::app>
                <NavBar />
                <main class=css::content>
                    <AppRouter />
                </main>
            </div>
        </ErrorBoundary>
    }
}
