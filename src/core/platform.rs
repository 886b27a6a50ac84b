//! Host platform integration.
//!
//! The mini-app runs inside the Telegram client, which injects
//! `window.Telegram.WebApp`. Access goes through direct JavaScript interop
//! via the Reflect API. Outside Telegram the [`BrowserPlatform`] no-op
//! implementation is used instead.

use std::sync::Arc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::core::error::PlatformError;
use crate::utils::dom;

/// Color scheme reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Capabilities the application needs from its host.
pub trait HostPlatform: Send + Sync {
    fn name(&self) -> &'static str;

    /// Signal that the UI is ready to be shown.
    fn ready(&self);

    /// Expand the mini-app to full height.
    fn expand(&self);

    fn color_scheme(&self) -> ColorScheme;

    fn user_first_name(&self) -> Option<String>;

    fn set_back_button_visible(&self, visible: bool);

    /// Register a callback for the host back button.
    fn on_back_button(&self, callback: Box<dyn Fn()>) -> Result<(), PlatformError>;

    /// Short haptic confirmation after a successful action.
    fn notify_success(&self);
}

/// Shared handle to the injected platform.
pub type SharedPlatform = Arc<dyn HostPlatform>;

/// Pick the Telegram platform when the app was launched by the client.
pub fn detect() -> SharedPlatform {
    if TelegramPlatform::is_available() {
        log::info!("running inside Telegram");
        Arc::new(TelegramPlatform)
    } else {
        log::info!("not launched from Telegram, using browser platform");
        Arc::new(BrowserPlatform)
    }
}

// ============================================================================
// Telegram
// ============================================================================

/// `window.Telegram.WebApp` accessor.
pub struct TelegramPlatform;

/// Read a nested object property, e.g. `get_object(&root, &["a", "b"])`.
fn get_object(root: &JsValue, keys: &[&str]) -> Result<Object, PlatformError> {
    let mut current = root.clone();
    for key in keys {
        current = Reflect::get(&current, &(*key).into())
            .map_err(|_| PlatformError::CallFailed(key.to_string()))?;
    }
    current
        .dyn_into::<Object>()
        .map_err(|_| PlatformError::Unavailable)
}

/// Call `target.method(args...)`.
fn call_method(target: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, PlatformError> {
    let function = Reflect::get(target, &method.into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| PlatformError::CallFailed(method.to_string()))?;

    let args: Array = args.iter().collect();
    function
        .apply(target, &args)
        .map_err(|e| PlatformError::CallFailed(format!("{}: {:?}", method, e)))
}

impl TelegramPlatform {
    fn web_app() -> Result<Object, PlatformError> {
        let window = dom::window().ok_or(PlatformError::Unavailable)?;
        get_object(&window, &["Telegram", "WebApp"])
    }

    /// `telegram-web-app.js` defines `WebApp` in any browser; only a
    /// launch from the Telegram client fills in `initData`.
    pub fn is_available() -> bool {
        let init_data = Self::web_app()
            .ok()
            .and_then(|app| Reflect::get(&app, &"initData".into()).ok())
            .and_then(|v| v.as_string());
        is_launched_by_client(init_data.as_deref())
    }

    fn invoke(path: &[&str], method: &str, args: &[JsValue]) {
        let result = Self::web_app()
            .and_then(|app| get_object(&app, path))
            .and_then(|target| call_method(&target, method, args));
        if let Err(e) = result {
            log::warn!("{}", e);
        }
    }
}

/// Whether the signed launch data passed by the client is present.
fn is_launched_by_client(init_data: Option<&str>) -> bool {
    init_data.is_some_and(|data| !data.trim().is_empty())
}

impl HostPlatform for TelegramPlatform {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn ready(&self) {
        Self::invoke(&[], "ready", &[]);
    }

    fn expand(&self) {
        Self::invoke(&[], "expand", &[]);
    }

    fn color_scheme(&self) -> ColorScheme {
        Self::web_app()
            .ok()
            .and_then(|app| Reflect::get(&app, &"colorScheme".into()).ok())
            .and_then(|v| v.as_string())
            .map(|s| ColorScheme::parse(&s))
            .unwrap_or_default()
    }

    fn user_first_name(&self) -> Option<String> {
        let app = Self::web_app().ok()?;
        let user = get_object(&app, &["initDataUnsafe", "user"]).ok()?;
        Reflect::get(&user, &"first_name".into())
            .ok()?
            .as_string()
            .filter(|name| !name.is_empty())
    }

    fn set_back_button_visible(&self, visible: bool) {
        let method = if visible { "show" } else { "hide" };
        Self::invoke(&["BackButton"], method, &[]);
    }

    /// The closure is leaked with `forget()`: the listener lives as long
    /// as the page.
    #[cfg(target_arch = "wasm32")]
    fn on_back_button(&self, callback: Box<dyn Fn()>) -> Result<(), PlatformError> {
        let button = get_object(&Self::web_app()?, &["BackButton"])?;
        let closure = Closure::wrap(callback);
        call_method(&button, "onClick", &[closure.as_ref().clone()])?;
        closure.forget();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn on_back_button(&self, _callback: Box<dyn Fn()>) -> Result<(), PlatformError> {
        Err(PlatformError::Unavailable)
    }

    fn notify_success(&self) {
        Self::invoke(&["HapticFeedback"], "notificationOccurred", &["success".into()]);
    }
}

// ============================================================================
// Browser fallback
// ============================================================================

/// Plain browser tab: every capability is a no-op.
pub struct BrowserPlatform;

impl HostPlatform for BrowserPlatform {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn ready(&self) {}

    fn expand(&self) {}

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }

    fn user_first_name(&self) -> Option<String> {
        None
    }

    fn set_back_button_visible(&self, _visible: bool) {}

    fn on_back_button(&self, _callback: Box<dyn Fn()>) -> Result<(), PlatformError> {
        Err(PlatformError::Unavailable)
    }

    fn notify_success(&self) {}
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_call_method_passes_every_argument() {
        let target = Object::new();
        let sum = Function::new_with_args("a, b, c", "return a + b + c;");
        Reflect::set(&target, &"sum".into(), &sum).unwrap();

        let result = call_method(&target, "sum", &[1.into(), 2.into(), 3.into()]).unwrap();
        assert_eq!(result.as_f64(), Some(6.0));
    }

    #[wasm_bindgen_test]
    fn test_call_method_missing_function() {
        let target = Object::new();
        assert_eq!(
            call_method(&target, "missing", &[]),
            Err(PlatformError::CallFailed("missing".to_string()))
        );
    }

    #[wasm_bindgen_test]
    fn test_plain_page_is_not_a_telegram_launch() {
        assert!(!TelegramPlatform::is_available());
    }
}
