//! Construction-time configuration errors.
//!
//! Steering itself never fails per tick; everything that can go wrong is
//! rejected when an agent is built.

use crate::constants::{MAX_DIRECTIONS, MIN_DIRECTIONS};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Direction count outside the supported range.
    #[error("direction count {0} is outside {MIN_DIRECTIONS}..={MAX_DIRECTIONS}")]
    DirectionCount(usize),

    /// Obstacle sensor length outside the supported range.
    #[error("obstacle distance sensitivity {0} is outside 0.01..=1000")]
    Sensitivity(f32),

    /// A parameter that must be non-negative was negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// A parameter was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}
