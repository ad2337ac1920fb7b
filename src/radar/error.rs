/// Construction-time errors for the radar widget.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("ripple count must be at least 1, got {0}")]
    InvalidRippleCount(u32),

    #[error("cycle duration must be positive")]
    InvalidCycleDuration,

    #[error("tick period must be positive")]
    InvalidTickPeriod,

    #[error("failed to load bitmap '{path}': {reason}")]
    AssetLoad { path: String, reason: String },
}
