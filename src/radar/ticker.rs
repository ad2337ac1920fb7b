/// Progress ticker: the animation driver behind the ripple cycle.
///
/// Linear over wall-clock time, infinite repeat with restart-on-wrap:
/// elapsed time wraps at `cycle_ms`, and progress is the tick count modulo
/// 100. At the default cycle/tick the wrap lands on progress 0, so the
/// restart is invisible.

pub struct ProgressTicker {
    elapsed_ms: f64,
    cycle_ms: f64,
    tick_ms: f64,
}

impl ProgressTicker {
    pub fn new(cycle_ms: u64, tick_ms: u64) -> Self {
        Self {
            elapsed_ms: 0.0,
            cycle_ms: cycle_ms as f64,
            tick_ms: tick_ms as f64,
        }
    }

    pub fn update(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms;
        while self.elapsed_ms >= self.cycle_ms {
            self.elapsed_ms -= self.cycle_ms;
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    /// Current cycle position in [0,100).
    pub fn progress(&self) -> u32 {
        ((self.elapsed_ms / self.tick_ms) as u64 % 100) as u32
    }
}
