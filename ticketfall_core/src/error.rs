use ticketfall_shared::ClientError;

/// A reel surface could not be drawn or animated.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct SurfaceError(pub String);

impl SurfaceError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SpinError {
    #[error("a spin is already in progress")]
    Busy,
    #[error("spin request failed: {0}")]
    Fetch(#[from] ClientError),
    #[error("reel {reel} failed: {source}")]
    Surface {
        reel: usize,
        #[source]
        source: SurfaceError,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ticket height plus gap must be positive, got {0}")]
    ItemSize(f64),
    #[error("idle strip of {len} tickets cannot show index {focus}")]
    IdleTooShort { len: usize, focus: usize },
    #[error("start back-off {backoff} exceeds the {filler} filler tickets of reel 0")]
    BackoffTooLarge { backoff: usize, filler: usize },
    #[error("easing x control points must lie in [0, 1]")]
    Easing,
}
