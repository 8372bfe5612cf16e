//! Timed movement suspension, modeled as a deadline.

/// Deadline in simulation seconds after which movement resumes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PauseGate {
    until: Option<f64>,
}

impl PauseGate {
    /// Suspend until `now + duration`, replacing any active deadline.
    pub fn pause(&mut self, now: f64, duration: f64) {
        self.until = Some(now + duration.max(0.0));
    }

    /// Drop the deadline without signaling a resume.
    pub fn cancel(&mut self) {
        self.until = None;
    }

    pub fn is_active(&self) -> bool {
        self.until.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.until
    }

    /// Seconds left before resuming, zero when inactive.
    pub fn remaining(&self, now: f64) -> f64 {
        self.until.map_or(0.0, |until| (until - now).max(0.0))
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }
}
