use std::time::Duration;

use async_trait::async_trait;
use ticketfall_shared::{ClientResult, SpinClient, SpinResult};

use crate::easing::Motion;
use crate::error::SurfaceError;
use crate::strip::Strip;

#[async_trait(?Send)]
pub trait SpinSource {
    async fn fetch(&self) -> ClientResult<SpinResult>;
}

#[async_trait(?Send)]
impl SpinSource for SpinClient {
    async fn fetch(&self) -> ClientResult<SpinResult> {
        self.spin().await
    }
}

#[async_trait(?Send)]
pub trait ReelSurface {
    fn replace(&self, strip: &Strip) -> Result<(), SurfaceError>;

    fn jump_to(&self, offset: f64) -> Result<(), SurfaceError>;

    // commit pending layout so the previous jump is not animated
    fn flush_layout(&self) {}

    /// Animate to `offset`; resolves once the surface reports the move finished.
    async fn fall_to(&self, offset: f64, motion: &Motion) -> Result<(), SurfaceError>;
}

pub trait SpinView {
    fn set_trigger_enabled(&self, enabled: bool);
    fn show_message(&self, text: &str);
}

pub trait HostBridge {
    fn expand(&self) {}
    fn notify_success(&self) {}
}

#[async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}
