//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::TravelMode;
use crate::types::{AgentId, Vec2};

/// All possible agent control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Targeting ---
    /// Give the agent a target position.
    SetTarget { agent: AgentId, target: Vec2 },
    /// Remove the agent's target; steering becomes a no-op.
    ClearTarget { agent: AgentId },
    /// Switch between seeking and orbiting.
    SetMode { agent: AgentId, mode: TravelMode },

    // --- Movement control ---
    /// Change cruise speed.
    SetSpeed { agent: AgentId, speed: f32 },
    /// Enable or disable movement.
    SetCanMove { agent: AgentId, can_move: bool },
    /// Suspend movement for `duration` seconds, replacing any active pause.
    PauseAgent { agent: AgentId, duration: f64 },
}

impl SimCommand {
    /// Agent addressed by this command.
    pub fn agent(&self) -> AgentId {
        match self {
            SimCommand::SetTarget { agent, .. }
            | SimCommand::ClearTarget { agent }
            | SimCommand::SetMode { agent, .. }
            | SimCommand::SetSpeed { agent, .. }
            | SimCommand::SetCanMove { agent, .. }
            | SimCommand::PauseAgent { agent, .. } => *agent,
        }
    }
}
