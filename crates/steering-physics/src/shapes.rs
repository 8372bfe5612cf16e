//! Collider shapes and their ray intersection.
//!
//! Shapes are solid. A ray starting inside a shape enters it at distance 0;
//! a ray starting on the surface and heading outward does not hit it.

use serde::{Deserialize, Serialize};
use steering_core::types::Vec2;

/// Slack for surface-touching rays.
const SURFACE_EPSILON: f32 = 1e-5;

/// Collider geometry, positioned by its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned box.
    Box { half_extents: Vec2 },
}

impl Shape {
    /// Entry distance of the ray `origin + t * direction` into this shape
    /// centered at `center`. `direction` must be unit length.
    pub fn ray_entry(&self, center: Vec2, origin: Vec2, direction: Vec2) -> Option<f32> {
        let (t_enter, t_exit) = match *self {
            Shape::Circle { radius } => circle_span(center, radius, origin, direction)?,
            Shape::Box { half_extents } => box_span(center, half_extents, origin, direction)?,
        };

        if t_exit <= SURFACE_EPSILON {
            return None; // Behind the origin, or leaving from the surface
        }
        Some(t_enter.max(0.0))
    }
}

fn circle_span(center: Vec2, radius: f32, origin: Vec2, direction: Vec2) -> Option<(f32, f32)> {
    let m = origin - center;
    let b = m.dot(direction);
    let c = m.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    Some((-b - root, -b + root))
}

fn box_span(center: Vec2, half_extents: Vec2, origin: Vec2, direction: Vec2) -> Option<(f32, f32)> {
    let min = center - half_extents;
    let max = center + half_extents;
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..2 {
        let o = origin[axis];
        let d = direction[axis];
        if d.abs() < f32::EPSILON {
            // Parallel to this slab: must already be between its planes
            if o < min[axis] - SURFACE_EPSILON || o > max[axis] + SURFACE_EPSILON {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - o) / d;
        let t2 = (max[axis] - o) / d;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
        if t_max < t_min {
            return None;
        }
    }

    Some((t_min, t_max))
}
