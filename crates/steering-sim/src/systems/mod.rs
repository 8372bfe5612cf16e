//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and the collision
//! world.

pub mod colliders;
pub mod movement;
pub mod snapshot;
pub mod steering;
