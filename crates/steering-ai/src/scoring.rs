//! Baseline desirability: goal alignment, orbit shaping, heading continuity.

use rand::Rng;
use steering_core::enums::TravelMode;
use steering_core::types::{DirectionSample, Vec2};

/// Orbit ring geometry and the hysteresis flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    is_orbiting: bool,
    radius: f32,
    /// Per-agent ring offset so orbiting agents don't share one circle.
    offset: f32,
    thickness: f32,
}

impl OrbitState {
    /// Draw the ring offset uniformly from `[0, radius / 2)`.
    pub fn new<R: Rng + ?Sized>(radius: f32, thickness: f32, rng: &mut R) -> Self {
        let half = radius / 2.0;
        let offset = if half > 0.0 {
            rng.gen_range(0.0..half)
        } else {
            0.0
        };
        Self::with_offset(radius, thickness, offset)
    }

    pub fn with_offset(radius: f32, thickness: f32, offset: f32) -> Self {
        Self {
            is_orbiting: false,
            radius,
            offset,
            thickness,
        }
    }

    pub fn is_orbiting(&self) -> bool {
        self.is_orbiting
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Distance at or below which orbiting starts.
    pub fn inner_radius(&self) -> f32 {
        self.radius + self.offset
    }

    /// Distance above which orbiting stops.
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.offset + self.thickness
    }

    /// Update from the current distance to the target. Inside the band
    /// between the inner and outer radius the previous value holds.
    pub fn update(&mut self, distance: f32) -> bool {
        if distance > self.outer_radius() {
            self.is_orbiting = false;
        } else if distance <= self.inner_radius() {
            self.is_orbiting = true;
        }
        self.is_orbiting
    }
}

/// Writes the baseline weight of every direction.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    pub desire_keep_same_dir: f32,
}

impl ScoringEngine {
    /// Overwrite `field` with `dot(d, dir_to_target)` (reshaped to
    /// `1 - |dot|` while orbiting) plus the continuity term.
    pub fn score(
        &self,
        field: &mut [DirectionSample],
        mode: TravelMode,
        orbiting: bool,
        dir_to_target: Vec2,
        current_heading: Vec2,
    ) {
        let tangential = mode == TravelMode::Orbit && orbiting;
        for sample in field.iter_mut() {
            let mut w = sample.direction.dot(dir_to_target);
            if tangential {
                w = 1.0 - w.abs();
            }
            sample.weight = w + sample.direction.dot(current_heading) * self.desire_keep_same_dir;
        }
    }
}
