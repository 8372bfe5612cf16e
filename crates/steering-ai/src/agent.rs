//! Per-agent steering pipeline.
//!
//! Each tick: score baseline weights, apply obstacle sensing, pick the
//! arg-max, let the obstruction lock override it, then smooth the result
//! into a velocity. The host supplies position, time and a ray caster;
//! the agent returns a [`SteerOutcome`] for the host to apply.

use rand::Rng;
use steering_core::config::SteeringConfig;
use steering_core::enums::{LockState, SteerOutcome, TravelMode};
use steering_core::error::ConfigError;
use steering_core::state::FieldSnapshot;
use steering_core::types::{ColliderId, DirectionSample, Tag, TickContext, Vec2};
use steering_physics::{Layers, RayCaster};
use tracing::{debug, trace};

use crate::directions::DirectionSet;
use crate::field::select_best;
use crate::long_range::LongRangeEstimator;
use crate::motion::MotionIntegrator;
use crate::obstruction::{LockThresholds, ObstructionLock};
use crate::pause::PauseGate;
use crate::scoring::{OrbitState, ScoringEngine};
use crate::sensor::ObstacleSensor;

#[derive(Debug, Clone)]
pub struct SteeringAgent {
    config: SteeringConfig,
    directions: DirectionSet,
    short_range: Vec<DirectionSample>,
    long_range: Vec<DirectionSample>,
    scoring: ScoringEngine,
    sensor: ObstacleSensor,
    lock: ObstructionLock,
    estimator: LongRangeEstimator,
    motion: MotionIntegrator,
    orbit: OrbitState,
    pause: PauseGate,
    desired_heading: Vec2,
    can_move: bool,
}

impl SteeringAgent {
    /// Build an agent. `own_collider` is excluded from obstacle sensing;
    /// `comrade` is the interned form of `config.comrade_tag`.
    pub fn new<R: Rng + ?Sized>(
        config: SteeringConfig,
        own_collider: Option<ColliderId>,
        comrade: Option<Tag>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let orbit = OrbitState::new(config.orbit_radius, config.orbit_radius_thickness, rng);
        Self::with_orbit(config, own_collider, comrade, orbit)
    }

    /// Build an agent with a fixed orbit state instead of a random offset.
    pub fn with_orbit(
        config: SteeringConfig,
        own_collider: Option<ColliderId>,
        comrade: Option<Tag>,
        orbit: OrbitState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let directions = DirectionSet::new(config.num_of_weights)?;

        Ok(Self {
            short_range: directions.field(),
            long_range: directions.field(),
            directions,
            scoring: ScoringEngine {
                desire_keep_same_dir: config.desire_keep_same_dir,
            },
            sensor: ObstacleSensor {
                object_radius: config.object_radius,
                sensitivity: config.obstacle_distance_sensitivity,
                no_obstacle_desire: config.no_obstacle_desire,
                comrade,
                own_collider,
            },
            lock: ObstructionLock::new(LockThresholds {
                detection: config.obstruction_detection_threshold,
                max_change: config.max_obstruction_change_dir,
                min_change: config.min_obstruction_change_dir,
            }),
            estimator: LongRangeEstimator {
                object_radius: config.object_radius,
                bias_threshold: config.bias_threshold,
            },
            motion: MotionIntegrator::new(config.current_dir_smoothing, config.speed),
            orbit,
            pause: PauseGate::default(),
            desired_heading: Vec2::ZERO,
            can_move: true,
            config,
        })
    }

    // --- Per-tick operations ---

    /// Dispatch on `mode`. Seeking detours via the long-range estimate when
    /// `indirect_fallback` is on and a wall blocks the straight line.
    pub fn steer<C: RayCaster + ?Sized>(
        &mut self,
        ctx: &TickContext,
        caster: &C,
        mode: TravelMode,
        target: Option<Vec2>,
    ) -> SteerOutcome {
        match mode {
            TravelMode::Seek => {
                self.seek_with(ctx, caster, target, self.config.indirect_fallback)
            }
            TravelMode::Orbit => self.orbit(ctx, caster, target),
        }
    }

    /// Move straight toward `target`, stopping within the arrival distance.
    pub fn seek<C: RayCaster + ?Sized>(
        &mut self,
        ctx: &TickContext,
        caster: &C,
        target: Option<Vec2>,
    ) -> SteerOutcome {
        self.seek_with(ctx, caster, target, false)
    }

    /// Approach `target` and circle it once inside the orbit ring.
    pub fn orbit<C: RayCaster + ?Sized>(
        &mut self,
        ctx: &TickContext,
        caster: &C,
        target: Option<Vec2>,
    ) -> SteerOutcome {
        if !self.movement_enabled(ctx.now) {
            return SteerOutcome::Suspended;
        }
        let Some(target) = target else {
            return SteerOutcome::NoTarget;
        };

        let to_target = target - ctx.position;
        let was_orbiting = self.orbit.is_orbiting();
        let orbiting = self.orbit.update(to_target.length());
        if orbiting != was_orbiting {
            debug!(orbiting, "orbit state changed");
        }

        self.steer_toward(ctx, caster, TravelMode::Orbit, to_target.normalize_or_zero())
    }

    fn seek_with<C: RayCaster + ?Sized>(
        &mut self,
        ctx: &TickContext,
        caster: &C,
        target: Option<Vec2>,
        indirect: bool,
    ) -> SteerOutcome {
        if !self.movement_enabled(ctx.now) {
            return SteerOutcome::Suspended;
        }
        let Some(target) = target else {
            return SteerOutcome::NoTarget;
        };

        let to_target = target - ctx.position;
        if to_target.length() < self.config.min_distance_threshold {
            debug!("arrived");
            return SteerOutcome::Arrived;
        }

        let goal = if indirect && !self.has_direct_path(caster, ctx.position, target) {
            self.estimate_indirect(caster, ctx.position, target)
        } else {
            to_target.normalize_or_zero()
        };

        self.steer_toward(ctx, caster, TravelMode::Seek, goal)
    }

    fn steer_toward<C: RayCaster + ?Sized>(
        &mut self,
        ctx: &TickContext,
        caster: &C,
        mode: TravelMode,
        dir_to_goal: Vec2,
    ) -> SteerOutcome {
        let orbiting = mode == TravelMode::Orbit && self.orbit.is_orbiting();
        let center = self.center(ctx.position);

        self.scoring.score(
            &mut self.short_range,
            mode,
            orbiting,
            dir_to_goal,
            self.motion.heading(),
        );
        self.sensor
            .apply(&mut self.short_range, caster, center, orbiting);

        let best = select_best(&self.short_range);
        let heading = if self.config.use_obstruction_lock {
            self.lock.resolve(&mut self.short_range, best)
        } else {
            best.direction
        };
        trace!(index = best.index, weight = best.weight, "direction selected");

        self.desired_heading = heading;
        let velocity = self.motion.integrate(heading, ctx.dt);
        SteerOutcome::Moving { velocity }
    }

    // --- Long-range queries ---

    /// Heading proposed by the long-range estimator. Rebuilds the
    /// long-range field.
    pub fn estimate_indirect<C: RayCaster + ?Sized>(
        &mut self,
        caster: &C,
        position: Vec2,
        target: Vec2,
    ) -> Vec2 {
        let center = self.center(position);
        self.estimator
            .estimate(&mut self.long_range, caster, center, target)
    }

    /// True if no wall lies on the straight line to `target`.
    pub fn has_direct_path<C: RayCaster + ?Sized>(
        &self,
        caster: &C,
        position: Vec2,
        target: Vec2,
    ) -> bool {
        caster.line_of_sight(self.center(position), target, Layers::WALL)
    }

    // --- Movement control ---

    /// Suspend heading updates for `duration` seconds from `now`. A new
    /// pause replaces the running one.
    pub fn pause(&mut self, now: f64, duration: f64) {
        debug!(duration, "movement paused");
        self.can_move = false;
        self.pause.pause(now, duration);
    }

    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = speed;
        self.motion.speed = speed;
    }

    /// Resume if the pause deadline has passed, then report whether
    /// heading updates may run.
    fn movement_enabled(&mut self, now: f64) -> bool {
        if self.pause.poll(now) {
            debug!("movement resumed");
            self.can_move = true;
        }
        self.can_move
    }

    // --- Accessors ---

    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    pub fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_active()
    }

    pub fn pause_remaining(&self, now: f64) -> f64 {
        self.pause.remaining(now)
    }

    pub fn current_heading(&self) -> Vec2 {
        self.motion.heading()
    }

    pub fn desired_heading(&self) -> Vec2 {
        self.desired_heading
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbit.is_orbiting()
    }

    pub fn orbit_state(&self) -> &OrbitState {
        &self.orbit
    }

    pub fn orbit_offset(&self) -> f32 {
        self.orbit.offset()
    }

    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn short_range(&self) -> &[DirectionSample] {
        &self.short_range
    }

    pub fn long_range(&self) -> &[DirectionSample] {
        &self.long_range
    }

    /// Read-only projection of both fields for debug drawing.
    pub fn snapshot(&self, position: Vec2) -> FieldSnapshot {
        FieldSnapshot {
            center: self.center(position),
            object_radius: self.config.object_radius,
            current_heading: self.motion.heading(),
            desired_heading: self.desired_heading,
            lock: self.lock.state(),
            orbiting: self.orbit.is_orbiting(),
            short_range: self.short_range.clone(),
            long_range: self.long_range.clone(),
        }
    }

    fn center(&self, position: Vec2) -> Vec2 {
        position + self.config.center_offset
    }
}
