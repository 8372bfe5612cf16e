//! Obstruction lock state machine.
//!
//! Near obstacles the arg-max flips between neighbors on tiny weight
//! changes. Once the best weight drops below the detection threshold the
//! agent commits to one escape heading, biasing the field toward it each
//! tick, until that heading scores clear again.

use steering_core::constants::ESCAPE_HEADING_BIAS;
use steering_core::enums::LockState;
use steering_core::types::{DirectionSample, Vec2};
use tracing::debug;

use crate::field::Selection;

/// Thresholds that drive the lock.
#[derive(Debug, Clone, Copy)]
pub struct LockThresholds {
    /// Best weight below which the path counts as obstructed; the escape
    /// heading releases once its weight reaches this.
    pub detection: f32,
    /// Biased arg-max above this replaces the escape heading.
    pub max_change: f32,
    /// Escape weight below this replaces the escape heading.
    pub min_change: f32,
}

#[derive(Debug, Clone)]
pub struct ObstructionLock {
    state: LockState,
    escape_heading: Vec2,
    escape_index: usize,
    thresholds: LockThresholds,
}

impl ObstructionLock {
    pub fn new(thresholds: LockThresholds) -> Self {
        Self {
            state: LockState::Clear,
            escape_heading: Vec2::ZERO,
            escape_index: 0,
            thresholds,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    /// Escape heading and its index while locked.
    pub fn escape(&self) -> Option<(usize, Vec2)> {
        self.is_locked()
            .then_some((self.escape_index, self.escape_heading))
    }

    /// Heading to commit to this tick, given the field's normal arg-max.
    /// While locked the field is biased toward the escape heading in place.
    pub fn resolve(&mut self, field: &mut [DirectionSample], best: Selection) -> Vec2 {
        let mut heading = best.direction;

        if self.state == LockState::Locked {
            let biased = self.bias_toward_escape(field);

            if biased.weight > self.thresholds.max_change
                || field[self.escape_index].weight < self.thresholds.min_change
            {
                if biased.index != self.escape_index {
                    debug!(
                        from = self.escape_index,
                        to = biased.index,
                        "escape heading changed"
                    );
                }
                self.escape_heading = biased.direction;
                self.escape_index = biased.index;
            }

            heading = self.escape_heading;

            if field[self.escape_index].weight >= self.thresholds.detection {
                debug!(index = self.escape_index, "obstruction cleared");
                heading = best.direction;
                self.state = LockState::Clear;
            }
        }

        if self.state == LockState::Clear && best.weight < self.thresholds.detection {
            debug!(index = best.index, weight = best.weight, "path obstructed");
            self.state = LockState::Locked;
            self.escape_heading = heading;
            self.escape_index = best.index;
        }

        heading
    }

    /// Add the escape bias to every weight and return the new arg-max.
    fn bias_toward_escape(&self, field: &mut [DirectionSample]) -> Selection {
        let mut best = Selection {
            index: 0,
            weight: -1.0,
            direction: field[0].direction,
        };
        for (i, sample) in field.iter_mut().enumerate() {
            sample.weight += sample.direction.dot(self.escape_heading) * ESCAPE_HEADING_BIAS;
            if sample.weight > best.weight {
                best = Selection {
                    index: i,
                    weight: sample.weight,
                    direction: sample.direction,
                };
            }
        }
        best
    }
}
