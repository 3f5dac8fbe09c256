//! Frame timing
//!
//! Turns host timestamps into a clamped simulation dt. There is no
//! accumulator: one step per frame, never longer than `MAX_FRAME_DT`.

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    dt: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now_ms` and return the clamped delta in seconds.
    ///
    /// The first frame has nothing to measure against and yields 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let raw = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.dt = raw.clamp(0.0, MAX_FRAME_DT);
        self.dt
    }

    /// Delta of the most recent frame
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Instantaneous frames per second, 0 before any time has passed
    pub fn fps(&self) -> u32 {
        if self.dt > 0.0 {
            (1.0 / self.dt).round() as u32
        } else {
            0
        }
    }
}
