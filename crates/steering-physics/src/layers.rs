//! Collision layer filter.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Layers a collider belongs to, and the filter a ray cast uses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Layers: u8 {
        /// Short-range sensing: rocks, props, other agents.
        const OBSTACLE = 1 << 0;
        /// Long-range sensing: level geometry the agent must path around.
        const WALL = 1 << 1;
    }
}
