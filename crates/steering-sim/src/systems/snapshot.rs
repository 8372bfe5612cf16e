//! Snapshot system: queries the ECS world and builds a `WorldSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use steering_ai::SteeringAgent;
use steering_core::components::*;
use steering_core::state::{AgentView, WorldSnapshot};
use steering_core::types::SimTime;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(world: &World, time: &SimTime) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        agents: build_agents(world),
    }
}

/// Build AgentView list, sorted by agent id.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(
            &Agent,
            &Position,
            &Velocity,
            &Goal,
            &LastOutcome,
            &SteeringAgent,
        )>()
        .iter()
        .map(|(_, (agent, pos, vel, goal, last, steering))| AgentView {
            id: agent.id,
            position: pos.0,
            velocity: vel.0,
            mode: goal.mode,
            target: goal.target,
            outcome: last.0,
            field: steering
                .config()
                .visualize_weights
                .then(|| steering.snapshot(pos.0)),
        })
        .collect();

    agents.sort_by_key(|view| view.id);
    agents
}
