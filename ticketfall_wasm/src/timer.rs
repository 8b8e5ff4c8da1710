use std::time::Duration;

use async_trait::async_trait;
use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{EventTarget, TransitionEvent};

use ticketfall_core::Clock;

/// Extra time granted to a transition before the timer settles it anyway.
pub const SETTLE_GRACE: Duration = Duration::from_millis(250);

fn millis(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}

fn resolve_after(resolve: &Function, delay: Duration) {
    let scheduled = web_sys::window().map(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(resolve, millis(delay))
    });
    if !matches!(scheduled, Some(Ok(_))) {
        let _ = resolve.call0(&JsValue::NULL);
    }
}

/// Pending completion of a transform transition on one element.
pub struct Settle {
    target: EventTarget,
    promise: Promise,
    listener: Closure<dyn FnMut(TransitionEvent)>,
}

impl Settle {
    pub async fn wait(self) -> Result<(), JsValue> {
        let outcome = JsFuture::from(self.promise).await;
        let _ = self.target.remove_event_listener_with_callback(
            "transitionend",
            self.listener.as_ref().unchecked_ref(),
        );
        outcome.map(|_| ())
    }
}

/// Completes on the target's own `transform` transitionend, or after `timeout`.
/// Bubbled events from children and other properties are ignored.
pub fn settled(target: &EventTarget, timeout: Duration) -> Settle {
    let mut resolver = None;
    let promise = Promise::new(&mut |resolve, _reject| resolver = Some(resolve));
    let resolve = resolver.unwrap_or_else(|| Function::new_no_args(""));

    let own: JsValue = target.clone().into();
    let on_end = resolve.clone();
    let listener = Closure::<dyn FnMut(TransitionEvent)>::new(move |event: TransitionEvent| {
        let from_track = event.target().is_some_and(|t| JsValue::from(t) == own);
        if from_track && event.property_name() == "transform" {
            let _ = on_end.call0(&JsValue::NULL);
        }
    });
    if let Err(e) = target
        .add_event_listener_with_callback("transitionend", listener.as_ref().unchecked_ref())
    {
        tracing::warn!(error = ?e, "transitionend listener rejected, relying on timer");
    }
    resolve_after(&resolve, timeout);

    Settle {
        target: target.clone(),
        promise,
        listener,
    }
}

/// `setTimeout`-backed clock.
pub struct BrowserClock;

#[async_trait(?Send)]
impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        let promise = Promise::new(&mut |resolve, _reject| resolve_after(&resolve, duration));
        let _ = JsFuture::from(promise).await;
    }
}
