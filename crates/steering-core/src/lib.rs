//! Core types and definitions for the context-steering controller.
//!
//! This crate defines the vocabulary shared across all other crates:
//! direction samples, configuration, commands, components, snapshots,
//! errors and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use config::SteeringConfig;
pub use error::ConfigError;
pub use types::Vec2;
