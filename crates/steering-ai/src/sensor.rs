//! Short-range obstacle sensing.
//!
//! One ray per direction against the obstacle layer. Hits subtract a
//! distance-scaled penalty that also bleeds into the neighboring
//! directions, so an obstacle blocks a sector rather than a single ray.

use steering_core::constants::COMRADE_SEPARATION_BAND;
use steering_core::types::{ColliderId, DirectionSample, Tag, Vec2};
use steering_physics::{Layers, RayCaster, RayHit};

use crate::field::{saturate, spread};

#[derive(Debug, Clone, Copy)]
pub struct ObstacleSensor {
    /// Rays start this far out from the sensing center.
    pub object_radius: f32,
    /// Ray length; penalty falls to zero at this distance.
    pub sensitivity: f32,
    pub no_obstacle_desire: f32,
    /// Colliders with this tag are tolerated at a band while orbiting.
    pub comrade: Option<Tag>,
    /// The agent's own collider, never counted as an obstacle.
    pub own_collider: Option<ColliderId>,
}

impl ObstacleSensor {
    /// Penalize blocked directions, reward clear ones, clamp to [-1, 1].
    pub fn apply<C: RayCaster + ?Sized>(
        &self,
        field: &mut [DirectionSample],
        caster: &C,
        center: Vec2,
        orbiting: bool,
    ) {
        for i in 0..field.len() {
            let direction = field[i].direction;
            let origin = center + direction * self.object_radius;
            let hits = caster.ray_cast_all(origin, direction, self.sensitivity, Layers::OBSTACLE);

            match self.nearest_foreign(&hits) {
                Some(hit) => {
                    let penalty = self.penalty(hit, orbiting);
                    spread(field, i, -penalty);
                }
                None => {
                    let w = field[i].weight;
                    if w > 0.0 {
                        field[i].weight += w * self.no_obstacle_desire;
                    }
                }
            }
        }

        saturate(field);
    }

    fn nearest_foreign<'a>(&self, hits: &'a [RayHit]) -> Option<&'a RayHit> {
        hits.iter()
            .filter(|hit| Some(hit.collider) != self.own_collider)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// 1 when touching, 0 at the sensor's range. Orbiting comrades get a
    /// bell curve peaking at the separation band instead.
    fn penalty(&self, hit: &RayHit, orbiting: bool) -> f32 {
        let penalty = 1.0 - (hit.distance / self.sensitivity).clamp(0.0, 1.0);
        let is_comrade = self.comrade.is_some() && hit.tag == self.comrade;
        if orbiting && is_comrade {
            1.0 - (penalty - COMRADE_SEPARATION_BAND).abs()
        } else {
            penalty
        }
    }
}
