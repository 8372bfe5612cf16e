//! Entity spawn factories for setting up the simulation world.
//!
//! Every spawned body gets an ECS entity plus a collider in the collision
//! world; the entity carries a `ColliderHandle` linking the two.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use steering_ai::SteeringAgent;
use steering_core::components::*;
use steering_core::enums::BodyKind;
use steering_core::error::ConfigError;
use steering_core::types::{AgentId, Vec2};
use steering_physics::{CollisionWorld, Layers, Shape};

use crate::scenario::{AgentSpec, ObstacleSpec, WallSpec};

/// Collision layers a static body occupies. Walls block both the
/// short-range sensor and the long-range estimate.
pub fn body_layers(kind: BodyKind) -> Layers {
    match kind {
        BodyKind::Obstacle => Layers::OBSTACLE,
        BodyKind::Wall => Layers::OBSTACLE | Layers::WALL,
    }
}

/// Spawn a steering agent. Its body is a circle of `object_radius` on the
/// obstacle layer, so other agents sense it and it ignores itself.
pub fn spawn_agent(
    world: &mut World,
    colliders: &mut CollisionWorld,
    rng: &mut ChaCha8Rng,
    id: AgentId,
    desc: &AgentSpec,
) -> Result<hecs::Entity, ConfigError> {
    let config = desc.config.clone();
    config.validate()?;

    let collider = colliders.insert(
        Shape::Circle {
            radius: config.object_radius,
        },
        desc.position + config.center_offset,
        Layers::OBSTACLE,
        desc.tag.as_deref(),
    );
    let comrade = colliders.intern_tag(&config.comrade_tag);

    let agent = SteeringAgent::new(config, Some(collider), Some(comrade), rng)?;

    info!(?id, position = ?desc.position, mode = ?desc.mode, "agent spawned");

    Ok(world.spawn((
        Agent { id },
        Position(desc.position),
        Velocity(Vec2::ZERO),
        Goal {
            target: desc.target,
            mode: desc.mode,
        },
        ColliderHandle { id: collider },
        LastOutcome::default(),
        agent,
    )))
}

/// Spawn an axis-aligned wall.
pub fn spawn_wall(
    world: &mut World,
    colliders: &mut CollisionWorld,
    desc: &WallSpec,
) -> hecs::Entity {
    let collider = colliders.insert(
        Shape::Box {
            half_extents: desc.half_extents,
        },
        desc.center,
        body_layers(BodyKind::Wall),
        None,
    );
    world.spawn((
        StaticBody {
            kind: BodyKind::Wall,
        },
        Position(desc.center),
        ColliderHandle { id: collider },
    ))
}

/// Spawn a round obstacle, optionally tagged.
pub fn spawn_obstacle(
    world: &mut World,
    colliders: &mut CollisionWorld,
    desc: &ObstacleSpec,
) -> hecs::Entity {
    let collider = colliders.insert(
        Shape::Circle {
            radius: desc.radius,
        },
        desc.center,
        body_layers(BodyKind::Obstacle),
        desc.tag.as_deref(),
    );
    world.spawn((
        StaticBody {
            kind: BodyKind::Obstacle,
        },
        Position(desc.center),
        ColliderHandle { id: collider },
    ))
}
