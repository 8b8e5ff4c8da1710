use std::cell::{Cell, RefCell};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, info};

use ticketfall_core::{
    AnimatorConfig, Clock, HostBridge, Motion, ReelSurface, SpinView, Strip, SurfaceError,
    Ticket, CURRENCY_LABEL,
};

/// A reel that lives in memory and reports frames through the log.
pub struct TerminalReel {
    index: usize,
    config: AnimatorConfig,
    frame: Duration,
    instant: bool,
    tickets: RefCell<Vec<Ticket>>,
    offset: Cell<f64>,
}

impl TerminalReel {
    pub fn new(index: usize, config: &AnimatorConfig, fps: u32, instant: bool) -> Self {
        Self {
            index,
            config: config.clone(),
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            instant,
            tickets: RefCell::new(Vec::new()),
            offset: Cell::new(0.0),
        }
    }

    /// Ticket under the focus line at the current offset.
    pub fn focused(&self) -> Option<Ticket> {
        let index = self.config.index_at(self.offset.get());
        usize::try_from(index)
            .ok()
            .and_then(|i| self.tickets.borrow().get(i).cloned())
    }
}

#[async_trait(?Send)]
impl ReelSurface for TerminalReel {
    fn replace(&self, strip: &Strip) -> Result<(), SurfaceError> {
        *self.tickets.borrow_mut() = strip.tickets.clone();
        Ok(())
    }

    fn jump_to(&self, offset: f64) -> Result<(), SurfaceError> {
        if !offset.is_finite() {
            return Err(SurfaceError::new(format!("offset {offset} is not finite")));
        }
        self.offset.set(offset);
        Ok(())
    }

    async fn fall_to(&self, offset: f64, motion: &Motion) -> Result<(), SurfaceError> {
        if !self.instant {
            let from = self.offset.get();
            let started = Instant::now();
            loop {
                let elapsed = started.elapsed();
                if elapsed >= motion.duration() {
                    break;
                }
                let y = motion.position(from, offset, elapsed);
                self.offset.set(y);
                debug!(
                    reel = self.index,
                    offset = y,
                    ticket = ?self.focused().map(|t| t.symbol.value),
                    "frame"
                );
                tokio::time::sleep(self.frame).await;
            }
        }
        self.offset.set(offset);

        let settled = self
            .focused()
            .ok_or_else(|| SurfaceError::new(format!("no ticket under offset {offset}")))?;
        println!(
            "reel {} settled on {} {}",
            self.index + 1,
            settled.amount(),
            CURRENCY_LABEL
        );
        Ok(())
    }
}

#[derive(Default)]
pub struct TerminalView {
    enabled: Cell<bool>,
}

impl TerminalView {
    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl SpinView for TerminalView {
    fn set_trigger_enabled(&self, enabled: bool) {
        debug!(enabled, "trigger");
        self.enabled.set(enabled);
    }

    fn show_message(&self, text: &str) {
        println!("{text}");
    }
}

pub struct TerminalHost;

impl HostBridge for TerminalHost {
    fn expand(&self) {
        debug!("expand requested, nothing to do in a terminal");
    }

    fn notify_success(&self) {
        info!("haptic feedback: success");
    }
}

pub struct TokioClock {
    pub instant: bool,
}

#[async_trait(?Send)]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        if !self.instant {
            tokio::time::sleep(duration).await;
        }
    }
}
