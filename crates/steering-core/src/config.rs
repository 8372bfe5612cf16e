//! Per-agent steering configuration.
//!
//! Every field has a default so partial JSON scenario files deserialize.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Vec2;

/// Construction-time steering parameters for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Number of candidate directions (4..=24).
    pub num_of_weights: usize,
    /// Body radius; rays start this far out from the center.
    pub object_radius: f32,
    /// Offset from the body position to the sensing center.
    pub center_offset: Vec2,
    /// Cruise speed (units/s).
    pub speed: f32,
    /// Base orbit radius around the target.
    pub orbit_radius: f32,
    /// Width of the hysteresis band outside the orbit ring.
    pub orbit_radius_thickness: f32,
    /// Distance below which a seek counts as arrived.
    pub min_distance_threshold: f32,
    /// Long-range: top-two weights closer than this pick the second best.
    pub bias_threshold: f32,
    /// Short-range sensor length. Closer hits are penalized harder.
    pub obstacle_distance_sensitivity: f32,
    /// Desire to keep the current heading rather than turn toward the target.
    pub desire_keep_same_dir: f32,
    /// Reward multiplier for directions with nothing in the way.
    pub no_obstacle_desire: f32,
    /// Tag of colliders treated as comrades while orbiting.
    pub comrade_tag: String,
    /// Best weight below which the path counts as obstructed.
    pub obstruction_detection_threshold: f32,
    /// Arg-max weight above which a locked agent switches escape heading.
    pub max_obstruction_change_dir: f32,
    /// Escape weight below which a locked agent switches escape heading.
    pub min_obstruction_change_dir: f32,
    /// Heading smoothing factor.
    pub current_dir_smoothing: f32,
    /// Enable the obstruction lock after selection.
    pub use_obstruction_lock: bool,
    /// Seek via the long-range estimate when walls block the direct line.
    pub indirect_fallback: bool,
    /// Include the direction fields in snapshots.
    pub visualize_weights: bool,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            num_of_weights: 16,
            object_radius: 0.2,
            center_offset: Vec2::ZERO,
            speed: 2.0,
            orbit_radius: 1.0,
            orbit_radius_thickness: 0.2,
            min_distance_threshold: 0.05,
            bias_threshold: 1.1,
            obstacle_distance_sensitivity: 0.48,
            desire_keep_same_dir: 0.1,
            no_obstacle_desire: 0.3,
            comrade_tag: "Enemy".to_string(),
            obstruction_detection_threshold: 0.1,
            max_obstruction_change_dir: 0.0,
            min_obstruction_change_dir: -0.8,
            current_dir_smoothing: 0.5,
            use_obstruction_lock: true,
            indirect_fallback: true,
            visualize_weights: false,
        }
    }
}

impl SteeringConfig {
    /// Check ranges and finiteness of every parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIRECTIONS..=MAX_DIRECTIONS).contains(&self.num_of_weights) {
            return Err(ConfigError::DirectionCount(self.num_of_weights));
        }

        let scalars = [
            ("object_radius", self.object_radius),
            ("center_offset.x", self.center_offset.x),
            ("center_offset.y", self.center_offset.y),
            ("speed", self.speed),
            ("orbit_radius", self.orbit_radius),
            ("orbit_radius_thickness", self.orbit_radius_thickness),
            ("min_distance_threshold", self.min_distance_threshold),
            ("bias_threshold", self.bias_threshold),
            (
                "obstacle_distance_sensitivity",
                self.obstacle_distance_sensitivity,
            ),
            ("desire_keep_same_dir", self.desire_keep_same_dir),
            ("no_obstacle_desire", self.no_obstacle_desire),
            (
                "obstruction_detection_threshold",
                self.obstruction_detection_threshold,
            ),
            ("max_obstruction_change_dir", self.max_obstruction_change_dir),
            ("min_obstruction_change_dir", self.min_obstruction_change_dir),
            ("current_dir_smoothing", self.current_dir_smoothing),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        let non_negative = [
            ("object_radius", self.object_radius),
            ("speed", self.speed),
            ("orbit_radius", self.orbit_radius),
            ("orbit_radius_thickness", self.orbit_radius_thickness),
            ("min_distance_threshold", self.min_distance_threshold),
            ("current_dir_smoothing", self.current_dir_smoothing),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(MIN_OBSTACLE_SENSITIVITY..=MAX_OBSTACLE_SENSITIVITY)
            .contains(&self.obstacle_distance_sensitivity)
        {
            return Err(ConfigError::Sensitivity(
                self.obstacle_distance_sensitivity,
            ));
        }

        Ok(())
    }
}
