//! 2D collision queries for the steering controller.
//!
//! Defines the ray-cast boundary the controller consumes and a reference
//! collision world of circle and box colliders that implements it.

pub use steering_core as core;

pub mod layers;
pub mod raycast;
pub mod shapes;
pub mod world;

// Re-export key types for convenience.
pub use layers::Layers;
pub use raycast::{RayCaster, RayHit};
pub use shapes::Shape;
pub use world::{Collider, CollisionWorld, TagRegistry};
