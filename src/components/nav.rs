//! Navigation bar component.
//!
//! One link per route; the link of the mounted view is highlighted.
//! Greets the Telegram user when the host exposes a first name.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::Location;

stylance::import_crate_style!(css, "src/components/nav.module.css");

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let greeting = ctx
        .platform()
        .user_first_name()
        .map(|name| format!("Hi, {}", name));
    let routes: Vec<_> = ctx.router.with_untracked(|r| r.table().iter().copied().collect());

    view! {
        <header class=css::bar>
            <div class=css::brand>
                <span class=css::icon><Icon icon=ic::CALCULATOR /></span>
                <span>{APP_NAME}</span>
                {greeting.map(|text| view! { <span class=css::greeting>{text}</span> })}
            </div>
            <nav class=css::tabs>
                {routes
                    .into_iter()
                    .map(|route| {
                        let href = Location::from_hash(route.path).to_hash();
                        let class = move || {
                            if ctx.active_view.get() == Some(route.view) {
                                css::active
                            } else {
                                css::tab
                            }
                        };
                        view! {
                            <a href=href class=class>
                                <span class=css::icon><Icon icon={ic::for_view(route.view)} /></span>
                                <span>{route.view.title()}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
