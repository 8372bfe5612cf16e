//! Context-steering controller.
//!
//! Scores a fixed ring of candidate directions every tick (goal alignment,
//! heading continuity, orbit shaping, obstacle clearance), commits to the
//! best one through an obstruction lock, and smooths it into a velocity.
//! No ECS dependency: operates on plain data and a [`RayCaster`].
//!
//! [`RayCaster`]: steering_physics::RayCaster

pub mod agent;
pub mod directions;
pub mod field;
pub mod long_range;
pub mod motion;
pub mod obstruction;
pub mod pause;
pub mod scoring;
pub mod sensor;

pub use agent::SteeringAgent;
pub use directions::DirectionSet;
pub use steering_core as core;

#[cfg(test)]
mod tests;
