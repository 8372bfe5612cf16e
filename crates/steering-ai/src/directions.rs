//! The fixed ring of candidate travel directions.

use steering_core::constants::{MAX_DIRECTIONS, MIN_DIRECTIONS};
use steering_core::error::ConfigError;
use steering_core::types::{unit_from_degrees, DirectionSample, Vec2};

/// N unit vectors evenly spaced around the circle, index 0 at +x,
/// increasing counter-clockwise in steps of 360/N degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSet {
    directions: Vec<Vec2>,
}

impl DirectionSet {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if !(MIN_DIRECTIONS..=MAX_DIRECTIONS).contains(&count) {
            return Err(ConfigError::DirectionCount(count));
        }

        let step = 360.0 / count as f32;
        let directions = (0..count)
            .map(|i| unit_from_degrees(i as f32 * step))
            .collect();
        Ok(Self { directions })
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.directions.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.directions.iter().copied()
    }

    /// Angular spacing between neighbors in degrees.
    pub fn step_degrees(&self) -> f32 {
        360.0 / self.directions.len() as f32
    }

    /// A fresh field over these directions with all weights zero.
    pub fn field(&self) -> Vec<DirectionSample> {
        self.iter().map(DirectionSample::new).collect()
    }
}
