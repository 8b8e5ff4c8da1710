use serde::{Deserialize, Serialize};

mod client;

pub use crate::client::SpinClient;

/// Number of reels in a spin result.
pub const REEL_COUNT: usize = 3;

/// Body of a `POST /spin` response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub reels: [f64; REEL_COUNT], // one target value per reel
    pub total_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
}

impl SpinResult {
    pub fn new(reels: [f64; REEL_COUNT], total_label: impl Into<String>) -> Self {
        Self {
            reels,
            total_label: total_label.into(),
            total_value: None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("invalid spin endpoint {0}")]
    InvalidEndpoint(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed spin result: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
