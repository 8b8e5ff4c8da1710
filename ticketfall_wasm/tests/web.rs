#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, TransitionEvent, TransitionEventInit};

use ticketfall_core::{plan_spin, AnimatorConfig, Clock, CubicBezier, Motion, ReelSurface};
use ticketfall_wasm::dom::DomReel;
use ticketfall_wasm::timer::settled;
use ticketfall_wasm::BrowserClock;

wasm_bindgen_test_configure!(run_in_browser);

fn track() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn replace_draws_tickets_and_marks_winner() {
    let el = track();
    let reel = DomReel::new(el.clone());
    let plan = plan_spin(&AnimatorConfig::default(), "web", 1, &[50.0, 50.0, 50.0]).remove(0);
    reel.replace(&plan.strip).unwrap();

    assert_eq!(el.child_element_count() as usize, plan.strip.len());
    let winner: HtmlElement = el.children().item(2).unwrap().dyn_into().unwrap();
    assert_eq!(winner.class_name(), "ticket");
    assert_eq!(
        winner.style().get_property_value("border-top-width").unwrap(),
        "2px"
    );
    assert_eq!(
        winner.first_element_child().unwrap().text_content().as_deref(),
        Some("50")
    );
}

#[wasm_bindgen_test]
fn jump_sets_transform() {
    let el = track();
    let reel = DomReel::new(el.clone());
    reel.jump_to(-70.0).unwrap();
    assert_eq!(
        el.style().get_property_value("transform").unwrap(),
        "translateY(-70px)"
    );
}

#[wasm_bindgen_test]
async fn zero_length_fall_settles_by_timer() {
    let el = track();
    let reel = DomReel::new(el.clone());
    reel.jump_to(-500.0).unwrap();
    let motion = Motion {
        duration_ms: 0,
        easing: CubicBezier::FALL,
    };
    reel.fall_to(-70.0, &motion).await.unwrap();
    assert_eq!(
        el.style().get_property_value("transform").unwrap(),
        "translateY(-70px)"
    );
}

fn transition_end(property: &str) -> TransitionEvent {
    let init = TransitionEventInit::new();
    init.set_bubbles(true);
    init.set_property_name(property);
    TransitionEvent::new_with_event_init_dict("transitionend", &init).unwrap()
}

#[wasm_bindgen_test]
async fn only_own_transform_transition_settles() {
    let el = track();
    let child = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("div")
        .unwrap();
    el.append_child(&child).unwrap();

    let done = Rc::new(Cell::new(false));
    {
        let (el, done) = (el.clone(), done.clone());
        spawn_local(async move {
            settled(&el, Duration::from_secs(60)).wait().await.unwrap();
            done.set(true);
        });
    }
    BrowserClock.sleep(Duration::from_millis(20)).await;

    child.dispatch_event(&transition_end("transform")).unwrap();
    BrowserClock.sleep(Duration::from_millis(20)).await;
    assert!(!done.get(), "bubbled child transition");

    el.dispatch_event(&transition_end("opacity")).unwrap();
    BrowserClock.sleep(Duration::from_millis(20)).await;
    assert!(!done.get(), "other property");

    el.dispatch_event(&transition_end("transform")).unwrap();
    BrowserClock.sleep(Duration::from_millis(20)).await;
    assert!(done.get());
}
