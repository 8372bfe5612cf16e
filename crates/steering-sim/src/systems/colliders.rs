//! Keeps agent colliders at their bodies' sensing centers.

use hecs::World;

use steering_ai::SteeringAgent;
use steering_core::components::{ColliderHandle, Position};
use steering_physics::CollisionWorld;

pub fn sync(world: &World, colliders: &mut CollisionWorld) {
    let mut query = world.query::<(&Position, &ColliderHandle, &SteeringAgent)>();
    for (_entity, (pos, handle, agent)) in query.iter() {
        colliders.set_position(handle.id, pos.0 + agent.config().center_offset);
    }
}
