pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod rng;
pub mod strip;
pub mod surface;
pub mod symbols;

pub use crate::config::{AnimatorConfig, Messages};
pub use crate::easing::{CubicBezier, Motion};
pub use crate::engine::{ReelAnimator, SpinReport, SpinState, Stage};
pub use crate::error::{ConfigError, SpinError, SurfaceError};
pub use crate::rng::StripRng;
pub use crate::strip::{plan_spin, ReelPlan, Strip};
pub use crate::surface::{Clock, HostBridge, ReelSurface, SpinSource, SpinView};
pub use crate::symbols::{Symbol, SymbolMatch, Ticket, CATALOG, CURRENCY_LABEL};
pub use ticketfall_shared::{ClientError, SpinResult, REEL_COUNT};
