//! Long-range indirect heading estimate.
//!
//! Casts effectively unbounded rays against walls only and scores each
//! direction by how much closer it gets the agent to the target before a
//! wall stops it, plus a bonus when the target is visible from past the
//! wall hit. Approximates "can I see the target around this corner"; it
//! is not a path planner.

use steering_core::constants::{DETOUR_PROBE_THRESHOLD, LONG_RANGE_RAY_LENGTH};
use steering_core::types::{DirectionSample, Vec2};
use steering_physics::{Layers, RayCaster};
use tracing::trace;

use crate::field::{reset, select_top_two, spread};

#[derive(Debug, Clone, Copy)]
pub struct LongRangeEstimator {
    pub object_radius: f32,
    /// Top-two weights closer than this pick the runner-up.
    pub bias_threshold: f32,
}

impl LongRangeEstimator {
    /// Rebuild `field` and return the proposed heading from `center`
    /// toward `target`.
    pub fn estimate<C: RayCaster + ?Sized>(
        &self,
        field: &mut [DirectionSample],
        caster: &C,
        center: Vec2,
        target: Vec2,
    ) -> Vec2 {
        reset(field);

        let to_target = target - center;
        let dist_to_target = to_target.length();
        let dir_to_target = to_target.normalize_or_zero();

        for i in 0..field.len() {
            let direction = field[i].direction;
            let origin = center + direction * self.object_radius;
            let hit = caster.ray_cast(origin, direction, LONG_RANGE_RAY_LENGTH, Layers::WALL);

            let w = direction.dot(dir_to_target);
            let shaped = 1.0 - w.abs();

            match hit {
                Some(hit) if hit.distance <= dist_to_target => {
                    let wall_progress = hit.distance * w;
                    spread(field, i, -(dist_to_target - wall_progress));
                }
                _ => {
                    let progress = dist_to_target * w;
                    field[i].weight += dist_to_target * 2.0 - (dist_to_target - progress);
                }
            }

            if shaped > DETOUR_PROBE_THRESHOLD || w < -DETOUR_PROBE_THRESHOLD {
                let reach = self.object_radius + hit.map_or(0.0, |h| h.distance);
                let probe = center + direction * reach;
                if caster.line_of_sight(probe, target, Layers::WALL) {
                    let probe_distance = (target - probe).length();
                    field[i].weight += dist_to_target * 2.0 - probe_distance;
                }
            }
        }

        let (best, second) = select_top_two(field);
        trace!(
            best = best.index,
            second = second.index,
            gap = best.weight - second.weight,
            "long-range estimate"
        );

        if (best.weight - second.weight).abs() < self.bias_threshold {
            second.direction
        } else {
            best.direction
        }
    }
}
