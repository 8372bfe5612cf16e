//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Steering logic lives in systems and in the steering agent, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{BodyKind, SteerOutcome, TravelMode};
use crate::types::{AgentId, ColliderId, Vec2};

/// World position of a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity of a body (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Marks an entity as a steering agent and carries its stable id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
}

/// What the agent is trying to reach this tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Goal {
    pub target: Option<Vec2>,
    pub mode: TravelMode,
}

/// Collider registered for this entity in the collision world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColliderHandle {
    pub id: ColliderId,
}

/// Static obstacle or wall.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StaticBody {
    pub kind: BodyKind,
}

/// Outcome of the most recent steering call, `None` before the first tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LastOutcome(pub Option<SteerOutcome>);
