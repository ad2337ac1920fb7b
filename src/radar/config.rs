/// Construction-time widget configuration. Immutable after validation.

use crate::core::config;
use crate::core::types::Color;
use crate::radar::error::RadarError;
use crate::radar::frame::Mode;

#[derive(Debug, Clone, Copy)]
pub struct RadarConfig {
    pub ripple_color: Color,
    pub ripple_count: u32,
    pub mode: Mode,
    pub cycle_ms: u64,
    pub tick_ms: u64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            ripple_color: Color::from_hex(config::DEFAULT_RIPPLE_COLOR, 1.0),
            ripple_count: config::DEFAULT_RIPPLE_COUNT,
            mode: Mode::ExpandOutward,
            cycle_ms: config::DEFAULT_CYCLE_MS,
            tick_ms: config::DEFAULT_TICK_MS,
        }
    }
}

impl RadarConfig {
    /// Reject configuration the widget cannot animate.
    pub fn validate(&self) -> Result<(), RadarError> {
        if self.ripple_count < 1 {
            return Err(RadarError::InvalidRippleCount(self.ripple_count));
        }
        if self.cycle_ms == 0 {
            return Err(RadarError::InvalidCycleDuration);
        }
        if self.tick_ms == 0 {
            return Err(RadarError::InvalidTickPeriod);
        }
        Ok(())
    }
}
