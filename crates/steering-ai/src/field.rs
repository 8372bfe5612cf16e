//! Operations shared by the short- and long-range direction fields.

use steering_core::constants::{FAR_NEIGHBOR_DIVISOR, NEAR_NEIGHBOR_DIVISOR};
use steering_core::types::{DirectionSample, Vec2};

/// The chosen entry of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub weight: f32,
    pub direction: Vec2,
}

impl Selection {
    fn at(field: &[DirectionSample], index: usize) -> Self {
        Self {
            index,
            weight: field[index].weight,
            direction: field[index].direction,
        }
    }
}

/// Single maximum weight. Ties keep the lowest index.
///
/// # Panics
/// Panics on an empty field; fields always hold at least four samples.
pub fn select_best(field: &[DirectionSample]) -> Selection {
    let mut best = Selection::at(field, 0);
    for (i, sample) in field.iter().enumerate().skip(1) {
        if sample.weight > best.weight {
            best = Selection::at(field, i);
        }
    }
    best
}

/// Best and runner-up. The runner-up starts at index 1 and is only
/// displaced by strictly greater weights.
pub fn select_top_two(field: &[DirectionSample]) -> (Selection, Selection) {
    let mut best = Selection::at(field, 0);
    let mut second = Selection::at(field, 1);
    for (i, sample) in field.iter().enumerate().skip(1) {
        if sample.weight > best.weight {
            second = best;
            best = Selection::at(field, i);
        } else if sample.weight > second.weight {
            second = Selection::at(field, i);
        }
    }
    (best, second)
}

/// Add `amount` at `index` and a falloff share to the two neighbors on
/// each side, wrapping around the ring.
pub fn spread(field: &mut [DirectionSample], index: usize, amount: f32) {
    let n = field.len();
    field[index].weight += amount;
    field[(index + 1) % n].weight += amount / NEAR_NEIGHBOR_DIVISOR;
    field[(index + 2) % n].weight += amount / FAR_NEIGHBOR_DIVISOR;
    field[(index + n - 1) % n].weight += amount / NEAR_NEIGHBOR_DIVISOR;
    field[(index + n - 2) % n].weight += amount / FAR_NEIGHBOR_DIVISOR;
}

/// Clamp every weight to [-1, 1].
pub fn saturate(field: &mut [DirectionSample]) {
    for sample in field.iter_mut() {
        sample.weight = sample.weight.clamp(-1.0, 1.0);
    }
}

/// Zero every weight, keeping directions.
pub fn reset(field: &mut [DirectionSample]) {
    for sample in field.iter_mut() {
        sample.weight = 0.0;
    }
}
