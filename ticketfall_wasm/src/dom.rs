use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use ticketfall_core::{Motion, ReelSurface, SpinView, Strip, SurfaceError, Ticket, CURRENCY_LABEL};

use crate::timer::{settled, SETTLE_GRACE};

const WINNER_BORDER: &str = "2px solid #fff";

fn js_err(context: &str, err: JsValue) -> SurfaceError {
    SurfaceError::new(format!("{context}: {err:?}"))
}

fn translate(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// `.ticket` element with its amount and currency rows.
pub fn ticket_element(document: &Document, ticket: &Ticket) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name("ticket");

    let amount = document.create_element("div")?;
    amount.set_class_name("ticket-amount");
    amount.set_text_content(Some(ticket.amount()));
    let label = document.create_element("div")?;
    label.set_class_name("ticket-label");
    label.set_text_content(Some(CURRENCY_LABEL));

    el.append_child(&amount)?;
    el.append_child(&label)?;
    if ticket.winner {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            html.style().set_property("border", WINNER_BORDER)?;
        }
    }
    Ok(el)
}

/// A reel backed by one track element; the track is moved with `translateY`.
pub struct DomReel {
    track: HtmlElement,
}

impl DomReel {
    pub fn new(track: HtmlElement) -> Self {
        Self { track }
    }

    fn set_style(&self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.track
            .style()
            .set_property(name, value)
            .map_err(|e| js_err(name, e))
    }
}

#[async_trait(?Send)]
impl ReelSurface for DomReel {
    fn replace(&self, strip: &Strip) -> Result<(), SurfaceError> {
        let document = self
            .track
            .owner_document()
            .ok_or_else(|| SurfaceError::new("track is not attached to a document"))?;
        self.set_style("transition", "none")?;
        self.track.set_inner_html("");
        for ticket in &strip.tickets {
            let el = ticket_element(&document, ticket).map_err(|e| js_err("ticket", e))?;
            self.track
                .append_child(&el)
                .map_err(|e| js_err("append", e))?;
        }
        Ok(())
    }

    fn jump_to(&self, offset: f64) -> Result<(), SurfaceError> {
        self.set_style("transform", &translate(offset))
    }

    fn flush_layout(&self) {
        // reading a layout property forces the pending style to apply
        let _ = self.track.offset_height();
    }

    async fn fall_to(&self, offset: f64, motion: &Motion) -> Result<(), SurfaceError> {
        let done = settled(&self.track, motion.duration() + SETTLE_GRACE);
        self.set_style("transition", &motion.css_transition())?;
        self.set_style("transform", &translate(offset))?;
        done.wait().await.map_err(|e| js_err("transition", e))?;
        Ok(())
    }
}

pub struct DomView {
    button: HtmlButtonElement,
    message: HtmlElement,
}

impl DomView {
    pub fn new(button: HtmlButtonElement, message: HtmlElement) -> Self {
        Self { button, message }
    }
}

impl SpinView for DomView {
    fn set_trigger_enabled(&self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }

    fn show_message(&self, text: &str) {
        self.message.set_inner_text(text);
    }
}
