//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in simulation space (world units, +x right, +y up).
pub use glam::Vec2;

/// One candidate travel direction and its accumulated desirability.
///
/// `direction` is a unit vector fixed at construction. `weight` is free
/// while terms are being summed and clamped to [-1, 1] by the obstacle pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionSample {
    pub weight: f32,
    pub direction: Vec2,
}

impl DirectionSample {
    pub fn new(direction: Vec2) -> Self {
        Self {
            weight: 0.0,
            direction,
        }
    }
}

/// Identifier of a collider in the collision world.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ColliderId(pub u32);

/// Interned collider tag. Resolved from a string once, compared as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(pub u32);

/// Stable agent identifier used by commands and snapshots.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AgentId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Per-tick inputs handed to a steering agent.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Agent body position (read-only to the controller).
    pub position: Vec2,
    /// Current simulation time in seconds, used for pause deadlines.
    pub now: f64,
    /// Tick length in seconds.
    pub dt: f32,
}

/// Unit vector at `degrees` counter-clockwise from +x.
pub fn unit_from_degrees(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin()).normalize()
}
