//! Ray-cast query boundary.
//!
//! The steering controller only ever talks to the collision world through
//! [`RayCaster`]. Queries are synchronous and read-only; an empty result
//! means the ray is clear.

use steering_core::types::{ColliderId, Tag, Vec2};

use crate::layers::Layers;

/// A single ray intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the entry point.
    pub distance: f32,
    pub collider: ColliderId,
    pub tag: Option<Tag>,
}

/// Ray-cast capability supplied by the host simulation.
pub trait RayCaster {
    /// Every collider on `layers` the ray enters within `max_distance`,
    /// ordered by increasing distance.
    fn ray_cast_all(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layers: Layers,
    ) -> Vec<RayHit>;

    /// Nearest hit, if any.
    fn ray_cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layers: Layers,
    ) -> Option<RayHit> {
        self.ray_cast_all(origin, direction, max_distance, layers)
            .into_iter()
            .next()
    }

    /// True if nothing on `layers` lies between `from` and `to`.
    fn line_of_sight(&self, from: Vec2, to: Vec2, layers: Layers) -> bool {
        let delta = to - from;
        let distance = delta.length();
        if distance <= f32::EPSILON {
            return true;
        }
        self.ray_cast(from, delta / distance, distance, layers)
            .is_none()
    }
}

impl<T: RayCaster + ?Sized> RayCaster for &T {
    fn ray_cast_all(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layers: Layers,
    ) -> Vec<RayHit> {
        (**self).ray_cast_all(origin, direction, max_distance, layers)
    }
}
