use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use tracing::{debug, warn};

use ticketfall_core::HostBridge;

fn lookup(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(root.clone(), |obj, key| {
        let v = Reflect::get(&obj, &JsValue::from_str(key)).ok()?;
        (!v.is_undefined() && !v.is_null()).then_some(v)
    })
}

fn call(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    f.apply(target, args)
}

/// `window.Telegram.WebApp`, when the page runs inside Telegram.
pub struct TelegramBridge {
    web_app: Option<JsValue>,
}

impl TelegramBridge {
    pub fn detect() -> Self {
        let web_app = web_sys::window().and_then(|w| lookup(w.as_ref(), &["Telegram", "WebApp"]));
        if web_app.is_none() {
            debug!("Telegram WebApp not found, host calls are no-ops");
        }
        Self { web_app }
    }
}

impl HostBridge for TelegramBridge {
    fn expand(&self) {
        let Some(app) = &self.web_app else { return };
        if let Err(e) = call(app, "expand", &Array::new()) {
            warn!(error = ?e, "WebApp.expand failed");
        }
    }

    fn notify_success(&self) {
        let Some(haptic) = self
            .web_app
            .as_ref()
            .and_then(|app| lookup(app, &["HapticFeedback"]))
        else {
            return;
        };
        let args = Array::of1(&JsValue::from_str("success"));
        if let Err(e) = call(&haptic, "notificationOccurred", &args) {
            warn!(error = ?e, "haptic notification failed");
        }
    }
}
