//! Shared form building blocks.

use leptos::prelude::*;

stylance::import_crate_style!(pub css, "src/components/calculator/calculator.module.css");

/// Labelled text input bound to a string signal.
///
/// The label may be static text or a closure that follows other fields.
#[component]
pub fn NumberField(
    #[prop(into)] label: TextProp,
    value: RwSignal<String>,
    #[prop(optional)] hint: Option<&'static str>,
    #[prop(default = "decimal")] inputmode: &'static str,
) -> impl IntoView {
    view! {
        <label class=css::field>
            <span class=css::label>{move || label.get().to_string()}</span>
            <input
                class=css::input
                type="text"
                inputmode=inputmode
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {hint.map(|text| view! { <span class=css::hint>{text}</span> })}
        </label>
    }
}

/// One line of a result breakdown.
#[component]
pub fn ResultRow(
    label: &'static str,
    value: String,
    #[prop(optional)] total: bool,
) -> impl IntoView {
    view! {
        <div class={if total { css::total } else { css::row }}>
            <span>{label}</span>
            <span>{value}</span>
        </div>
    }
}
