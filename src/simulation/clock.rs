//! Fixed-step clock decoupling physics from frame timing
//!
//! Converts arbitrary visual-time increments (variable frame rate, user
//! speed multipliers) into a whole number of fixed physics sub-steps. The
//! residual is kept in integer microseconds: integer addition is exact, so
//! the number of sub-steps taken depends only on the summed increments,
//! never on how a caller slices them into calls. A floating residual would
//! let two callers reaching the same nominal total time drift apart by a
//! step after enough additions.

const MICROS_PER_SECOND: f64 = 1.0e6;

#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step_us: u64,     // physics sub-step in microseconds
    residual_us: u64, // unconsumed time, always in [0, step_us)
}

impl FixedStepClock {
    /// Build a clock for the fixed sub-step `h` in seconds.
    /// `h` is rounded to whole microseconds once, here.
    pub fn new(h: f64) -> Self {
        let step_us = (h * MICROS_PER_SECOND).round() as u64;
        Self {
            step_us: step_us.max(1),
            residual_us: 0,
        }
    }

    /// Feed a visual-time increment in seconds; returns the number of whole
    /// sub-steps now due. The leftover carries to the next call.
    ///
    /// Increments must be non-negative; the residual has no protection
    /// against running backwards.
    pub fn push(&mut self, dt_visual: f64) -> u64 {
        debug_assert!(dt_visual >= 0.0, "clock driven backwards");
        self.residual_us += (dt_visual * MICROS_PER_SECOND).round() as u64;
        let steps = self.residual_us / self.step_us;
        self.residual_us -= steps * self.step_us;
        steps
    }

    /// Leftover time in seconds carried to the next push.
    pub fn residual(&self) -> f64 {
        self.residual_us as f64 / MICROS_PER_SECOND
    }

    /// The fixed sub-step in seconds, after microsecond rounding.
    pub fn step_seconds(&self) -> f64 {
        self.step_us as f64 / MICROS_PER_SECOND
    }

    /// Drop any accumulated residual.
    pub fn reset(&mut self) {
        self.residual_us = 0;
    }
}
