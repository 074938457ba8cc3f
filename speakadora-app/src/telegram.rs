//! Bindings to the Telegram WebApp object the host injects into the page, and to the clipboard.

use js_sys::{Function, Object, Promise, Reflect};
use log::warn;
use speakadora::{HostContext, HostUser};
use thiserror::Error;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Errors from talking to the host or the browser.
#[derive(Debug, Error)]
pub enum HostError {
    /// An underlying error from JS.
    #[error("Error from JS: {0:?}")]
    JsError(JsValue),
    /// The window was missing.
    #[error("Window was None")]
    NoWindow,
    /// The page is not running inside Telegram.
    #[error("window.Telegram.WebApp was null or undefined")]
    WebAppMissing,
    /// The clipboard API is unavailable.
    #[error("window.navigator.clipboard was null or undefined")]
    ClipboardMissing,
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::JsError(value)
    }
}

#[wasm_bindgen]
extern "C" {
    /// `window.Telegram.WebApp`.
    #[derive(Debug, Clone)]
    type WebApp;

    #[wasm_bindgen(method, catch)]
    fn expand(this: &WebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn ready(this: &WebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showPopup)]
    fn show_popup(this: &WebApp, params: &Object) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter, js_name = initDataUnsafe)]
    fn init_data_unsafe(this: &WebApp) -> JsValue;
}

/// Gets `target[name]`, treating null and undefined targets or values as missing.
fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    if target.is_null() || target.is_undefined() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_null() && !value.is_undefined())
}

/// Handle to the host application. Looked up fresh on every construction, since the host may
/// finish initializing after the page starts.
#[derive(Debug, Clone)]
pub struct TelegramHost {
    web_app: Option<WebApp>,
}

impl TelegramHost {
    /// Looks up the WebApp object. Outside of Telegram the handle is empty and every call on it
    /// is a no-op or an error.
    pub fn new() -> Self {
        let web_app = web_sys::window()
            .and_then(|window| property(&window, "Telegram"))
            .and_then(|telegram| property(&telegram, "WebApp"))
            .map(|web_app| web_app.unchecked_into::<WebApp>());
        Self { web_app }
    }

    fn web_app(&self) -> Result<&WebApp, HostError> {
        self.web_app.as_ref().ok_or(HostError::WebAppMissing)
    }

    /// Tells the host the view should take the full height and is ready to be shown.
    pub fn expand_and_ready(&self) -> Result<(), HostError> {
        let web_app = self.web_app()?;
        web_app.expand()?;
        web_app.ready()?;
        Ok(())
    }

    /// Shows a native popup with a title and message.
    pub fn show_popup(&self, title: &str, message: &str) -> Result<(), HostError> {
        let web_app = self.web_app()?;
        let params = Object::new();
        Reflect::set(&params, &"title".into(), &title.into())?;
        Reflect::set(&params, &"message".into(), &message.into())?;
        web_app.show_popup(&params)?;
        Ok(())
    }
}

impl HostContext for TelegramHost {
    fn user(&self) -> Option<HostUser> {
        let init_data = self.web_app.as_ref()?.init_data_unsafe();
        let user = property(&init_data, "user")?;
        let Some(id) = property(&user, "id")
            .and_then(|id| id.as_f64())
            .and_then(HostUser::id_from_number)
        else {
            warn!("Telegram user record has no integer id");
            return None;
        };
        Some(HostUser {
            id,
            username: property(&user, "username").and_then(|name| name.as_string()),
        })
    }
}

/// Writes `text` to the system clipboard.
pub async fn write_clipboard(text: &str) -> Result<(), HostError> {
    let navigator = web_sys::window().ok_or(HostError::NoWindow)?.navigator();
    let clipboard = property(&navigator, "clipboard").ok_or(HostError::ClipboardMissing)?;
    let write_text: Function = Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}
