//! Heading smoothing and velocity output.

use steering_core::constants::HEADING_BLEND_RATE;
use steering_core::types::Vec2;

/// Blends the committed heading toward each tick's chosen direction.
///
/// The blended heading is not renormalized, so after a sharp turn its
/// length dips below 1 and the emitted speed dips with it.
#[derive(Debug, Clone, Copy)]
pub struct MotionIntegrator {
    pub smoothing: f32,
    pub speed: f32,
    heading: Vec2,
}

impl MotionIntegrator {
    pub fn new(smoothing: f32, speed: f32) -> Self {
        Self {
            smoothing,
            speed,
            heading: Vec2::ZERO,
        }
    }

    /// Current (smoothed) heading.
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    /// Blend toward `desired` and return the resulting velocity.
    pub fn integrate(&mut self, desired: Vec2, dt: f32) -> Vec2 {
        let t = (self.smoothing * dt * HEADING_BLEND_RATE).clamp(0.0, 1.0);
        self.heading = self.heading.lerp(desired, t);
        self.heading * self.speed
    }
}
