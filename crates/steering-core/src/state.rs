//! World state snapshot: the read-only view produced after each tick.
//!
//! Snapshots are projections of the simulation; nothing in them feeds back
//! into steering.

use serde::{Deserialize, Serialize};

use crate::enums::{LockState, SteerOutcome, TravelMode};
use crate::types::{AgentId, DirectionSample, SimTime, Vec2};

/// Complete world state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub agents: Vec<AgentView>,
}

/// One agent as seen by a host or debug viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mode: TravelMode,
    pub target: Option<Vec2>,
    pub outcome: Option<SteerOutcome>,
    /// Present only when the agent has weight visualization enabled.
    pub field: Option<FieldSnapshot>,
}

/// Debug projection of an agent's direction fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Sensing center (position + center offset).
    pub center: Vec2,
    pub object_radius: f32,
    pub current_heading: Vec2,
    pub desired_heading: Vec2,
    pub lock: LockState,
    pub orbiting: bool,
    pub short_range: Vec<DirectionSample>,
    pub long_range: Vec<DirectionSample>,
}
