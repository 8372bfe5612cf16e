//! Enumeration types used throughout the controller.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// How an agent relates to its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelMode {
    /// Head straight for the target.
    #[default]
    Seek,
    /// Approach the target, then circle it.
    Orbit,
}

/// Obstruction lock state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockState {
    /// Normal arg-max steering.
    #[default]
    Clear,
    /// Committed to an escape heading until a direction clears.
    Locked,
}

/// Kind of static body placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Sensed by the short-range obstacle rays only.
    Obstacle,
    /// Sensed by both short-range and long-range rays.
    Wall,
}

/// Result of one steering call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SteerOutcome {
    /// A new velocity was computed.
    Moving { velocity: Vec2 },
    /// Within the arrival threshold; the body should stop.
    Arrived,
    /// No target supplied; velocity left untouched.
    NoTarget,
    /// Movement disabled or paused; velocity left untouched.
    Suspended,
}

impl SteerOutcome {
    /// Velocity the host should apply, if the outcome dictates one.
    pub fn velocity(&self) -> Option<Vec2> {
        match self {
            SteerOutcome::Moving { velocity } => Some(*velocity),
            SteerOutcome::Arrived => Some(Vec2::ZERO),
            SteerOutcome::NoTarget | SteerOutcome::Suspended => None,
        }
    }
}
