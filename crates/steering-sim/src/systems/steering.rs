//! Steering system: runs every agent's controller and applies the result.
//!
//! All agents sense the collision world as it stood after collider sync,
//! so update order within a tick does not matter.

use hecs::World;

use steering_ai::SteeringAgent;
use steering_core::components::{Goal, LastOutcome, Position, Velocity};
use steering_core::types::{SimTime, TickContext};
use steering_physics::CollisionWorld;

pub fn run(world: &mut World, colliders: &CollisionWorld, time: &SimTime, dt: f32) {
    for (_entity, (pos, goal, agent, vel, last)) in world.query_mut::<(
        &Position,
        &Goal,
        &mut SteeringAgent,
        &mut Velocity,
        &mut LastOutcome,
    )>() {
        let ctx = TickContext {
            position: pos.0,
            now: time.elapsed_secs,
            dt,
        };
        let outcome = agent.steer(&ctx, colliders, goal.mode, goal.target);

        // Arrived zeroes velocity; NoTarget and Suspended leave it as is
        if let Some(velocity) = outcome.velocity() {
            vel.0 = velocity;
        }
        last.0 = Some(outcome);
    }
}
