use wasm_bindgen::prelude::*;

mod app;
mod bridge;
pub mod dom;
pub mod timer;

pub use crate::app::App;
pub use crate::bridge::TelegramBridge;
pub use crate::timer::BrowserClock;

#[wasm_bindgen(start)]
pub fn run() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // tracing falls back to `log` records when no subscriber is installed
    console_log::init_with_level(log::Level::Debug).ok();
    yew::Renderer::<App>::new().render();
}
