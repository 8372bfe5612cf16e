//! Headless simulation host for context-steering agents.
//!
//! Owns the hecs ECS world and the collision world, runs systems at a
//! fixed tick rate, and produces `WorldSnapshot`s for hosts and tools.

pub mod engine;
pub mod error;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
pub use scenario::Scenario;
pub use steering_core as core;
