/// Radar widget: animation lifecycle, scan gating, and frame rendering.

use crate::core::config;
use crate::core::types::Vec2;
use crate::platform::renderer::Renderer;
use crate::radar::assets::RadarAssets;
use crate::radar::config::RadarConfig;
use crate::radar::error::RadarError;
use crate::radar::frame::{compute_frame, local_progress};
use crate::radar::ticker::ProgressTicker;

/// Widget lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No driver ticking; visuals frozen.
    Stopped,
    /// Ripples animating, scan overlay suppressed.
    Running,
    /// Ripples animating with the rotating scan overlay.
    Scanning,
}

pub struct RadarView {
    config: RadarConfig,
    assets: RadarAssets,
    ticker: ProgressTicker,
    phase: Phase,
    rotate_degree: u32,
}

impl RadarView {
    pub fn new(config: RadarConfig, assets: RadarAssets) -> Result<Self, RadarError> {
        config.validate()?;
        log::debug!("radar radius = {}", assets.scan_radius());

        Ok(Self {
            ticker: ProgressTicker::new(config.cycle_ms, config.tick_ms),
            config,
            assets,
            phase: Phase::Stopped,
            rotate_degree: 0,
        })
    }

    /// Begin animating from the intro ripple phase. Restarting after a stop
    /// discards any prior scan state and re-plays the intro.
    pub fn start(&mut self) {
        if self.phase != Phase::Stopped {
            return;
        }
        self.ticker.reset();
        self.rotate_degree = 0;
        self.phase = Phase::Running;
    }

    /// Idempotent; safe when already stopped.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> u32 {
        self.ticker.progress()
    }

    pub fn rotate_degree(&self) -> u32 {
        self.rotate_degree
    }

    /// Advance the driver and lifecycle state by one frame. Lifecycle moves
    /// here, never inside `render`.
    pub fn update(&mut self, dt_ms: f64) {
        match self.phase {
            Phase::Stopped => {}
            Phase::Running => {
                self.ticker.update(dt_ms);
                // Threshold rather than equality: the phase-shifted local
                // progress of the last ripple may step past 99 between frames.
                if self.last_ripple_progress() >= config::SCAN_START_PROGRESS {
                    log::debug!("scan overlay engaged");
                    self.phase = Phase::Scanning;
                }
            }
            Phase::Scanning => {
                self.ticker.update(dt_ms);
                self.rotate_degree = (self.rotate_degree + 1) % 360;
            }
        }
    }

    /// Draw one frame centered in a `width` x `height` viewport.
    pub fn render(&self, renderer: &dyn Renderer, width: f64, height: f64) {
        let center = Vec2::new(width / 2.0, height / 2.0);
        let frame = compute_frame(
            self.ticker.progress(),
            self.config.ripple_count,
            self.config.mode,
            self.phase == Phase::Scanning,
            self.rotate_degree,
            self.assets.scan_radius(),
        );

        for ripple in &frame.ripples {
            renderer.fill_circle(
                center.x,
                center.y,
                ripple.radius,
                self.config
                    .ripple_color
                    .with_alpha(ripple.alpha as f64 / 255.0),
            );
        }

        if let Some(angle) = frame.scan_angle {
            renderer.draw_image_rotated(self.assets.scan(), center, angle as f64);
        }

        // Center bitmap last, fully opaque
        let cw = self.assets.center().width() as f64;
        let ch = self.assets.center().height() as f64;
        renderer.draw_image(
            self.assets.center(),
            center.x - cw / 2.0,
            center.y - ch / 2.0,
        );
    }

    /// Hit test against the scan disc in a `width` x `height` viewport.
    pub fn hit_test(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        let dx = x - width / 2.0;
        let dy = y - height / 2.0;
        (dx * dx + dy * dy).sqrt() <= self.assets.scan_radius()
    }

    fn last_ripple_progress(&self) -> u32 {
        local_progress(
            self.ticker.progress(),
            self.config.ripple_count - 1,
            self.config.ripple_count,
            self.config.mode,
        )
    }
}

impl Drop for RadarView {
    // The widget must never outlive its surface with a ticking driver
    fn drop(&mut self) {
        self.stop();
    }
}
