#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use steering_core::config::SteeringConfig;
    use steering_core::enums::{LockState, SteerOutcome, TravelMode};
    use steering_core::error::ConfigError;
    use steering_core::types::{DirectionSample, TickContext, Vec2};
    use steering_physics::{CollisionWorld, Layers, Shape};

    use crate::agent::SteeringAgent;
    use crate::directions::DirectionSet;
    use crate::field::{select_best, select_top_two, spread};
    use crate::long_range::LongRangeEstimator;
    use crate::obstruction::{LockThresholds, ObstructionLock};
    use crate::pause::PauseGate;
    use crate::scoring::{OrbitState, ScoringEngine};
    use crate::sensor::ObstacleSensor;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-5;

    fn ctx(position: Vec2, now: f64) -> TickContext {
        TickContext {
            position,
            now,
            dt: DT,
        }
    }

    fn make_agent(config: SteeringConfig) -> SteeringAgent {
        let orbit = OrbitState::with_offset(config.orbit_radius, config.orbit_radius_thickness, 0.0);
        SteeringAgent::with_orbit(config, None, None, orbit).unwrap()
    }

    fn sensor() -> ObstacleSensor {
        ObstacleSensor {
            object_radius: 0.2,
            sensitivity: 0.48,
            no_obstacle_desire: 0.3,
            comrade: None,
            own_collider: None,
        }
    }

    fn field_with(n: usize, weights: &[f32]) -> Vec<DirectionSample> {
        let mut field = DirectionSet::new(n).unwrap().field();
        for (sample, w) in field.iter_mut().zip(weights) {
            sample.weight = *w;
        }
        field
    }

    /// Tiny circle placed so only the ray of direction `index` reaches it,
    /// `distance` past the ray origin.
    fn pin_obstacle(
        world: &mut CollisionWorld,
        set: &DirectionSet,
        index: usize,
        distance: f32,
        tag: Option<&str>,
    ) {
        let radius = 0.02;
        let dir = set.get(index).unwrap();
        let center = dir * (0.2 + distance + radius);
        world.insert(Shape::Circle { radius }, center, Layers::OBSTACLE, tag);
    }

    // ---- DirectionSet ----

    #[test]
    fn test_direction_set_spacing() {
        for n in 4..=24 {
            let set = DirectionSet::new(n).unwrap();
            assert_eq!(set.len(), n);
            let step = (360.0 / n as f32).to_radians();
            for (i, d) in set.iter().enumerate() {
                assert!((d.length() - 1.0).abs() < EPS, "n={n} i={i} not unit");
                let next = set.get((i + 1) % n).unwrap();
                let angle = d.angle_between(next);
                assert!((angle - step).abs() < 1e-4, "n={n} i={i} spacing {angle}");
            }
            assert!((set.get(0).unwrap() - Vec2::X).length() < EPS);
        }
    }

    #[test]
    fn test_direction_set_rejects_bad_count() {
        assert_eq!(DirectionSet::new(3), Err(ConfigError::DirectionCount(3)));
        assert_eq!(DirectionSet::new(25), Err(ConfigError::DirectionCount(25)));
    }

    #[test]
    fn test_directions_invariant_across_ticks() {
        let mut agent = make_agent(SteeringConfig::default());
        let before: Vec<Vec2> = agent.short_range().iter().map(|s| s.direction).collect();
        let world = CollisionWorld::new();
        for tick in 0..30 {
            agent.seek(&ctx(Vec2::ZERO, tick as f64 * DT as f64), &world, Some(Vec2::new(3.0, 2.0)));
        }
        let after: Vec<Vec2> = agent.short_range().iter().map(|s| s.direction).collect();
        assert_eq!(before, after);
        assert_eq!(agent.directions().len(), 16);
    }

    // ---- Field helpers ----

    #[test]
    fn test_select_best_ties_pick_lowest_index() {
        let field = field_with(8, &[0.2, 0.9, 0.5, 0.9, 0.1, 0.9, 0.0, 0.0]);
        let best = select_best(&field);
        assert_eq!(best.index, 1);
        assert_eq!(best.weight, 0.9);
    }

    #[test]
    fn test_select_top_two() {
        let field = field_with(8, &[0.7, -0.3, 0.5, 0.9, 0.1, 0.8, 0.0, 0.0]);
        let (best, second) = select_top_two(&field);
        assert_eq!(best.index, 3);
        assert_eq!(second.index, 5);

        // Best at index 0 with runner-up found later
        let field = field_with(8, &[1.0, -1.0, 0.2, 0.6, 0.1, 0.0, 0.0, 0.0]);
        let (best, second) = select_top_two(&field);
        assert_eq!(best.index, 0);
        assert_eq!(second.index, 3);
    }

    #[test]
    fn test_spread_wraps_around() {
        let mut field = field_with(8, &[0.0; 8]);
        spread(&mut field, 0, -1.0);
        let w: Vec<f32> = field.iter().map(|s| s.weight).collect();
        assert_eq!(w[0], -1.0);
        assert_eq!(w[1], -0.5);
        assert_eq!(w[7], -0.5);
        assert!((w[2] + 1.0 / 3.0).abs() < EPS);
        assert!((w[6] + 1.0 / 3.0).abs() < EPS);
        assert_eq!(&w[3..6], &[0.0, 0.0, 0.0]);
    }

    // ---- Scoring ----

    #[test]
    fn test_seek_scoring_is_goal_dot_plus_continuity() {
        let engine = ScoringEngine {
            desire_keep_same_dir: 0.5,
        };
        let mut field = DirectionSet::new(4).unwrap().field();
        engine.score(&mut field, TravelMode::Seek, false, Vec2::X, Vec2::Y);
        // +x: 1 + 0, +y: 0 + 0.5, -x: -1 + 0, -y: 0 - 0.5
        let expected = [1.0, 0.5, -1.0, -0.5];
        for (sample, e) in field.iter().zip(expected) {
            assert!((sample.weight - e).abs() < EPS);
        }
    }

    #[test]
    fn test_orbit_scoring_prefers_tangent() {
        let engine = ScoringEngine {
            desire_keep_same_dir: 0.0,
        };
        let mut field = DirectionSet::new(4).unwrap().field();
        engine.score(&mut field, TravelMode::Orbit, true, Vec2::X, Vec2::ZERO);
        let expected = [0.0, 1.0, 0.0, 1.0];
        for (sample, e) in field.iter().zip(expected) {
            assert!((sample.weight - e).abs() < EPS);
        }

        // Orbit mode outside the ring still seeks
        engine.score(&mut field, TravelMode::Orbit, false, Vec2::X, Vec2::ZERO);
        assert!((field[0].weight - 1.0).abs() < EPS);
    }

    #[test]
    fn test_orbit_hysteresis_no_flicker() {
        // inner = 1.0 + 0.3 = 1.3, outer = 1.5
        let mut orbit = OrbitState::with_offset(1.0, 0.2, 0.3);
        assert!(!orbit.update(2.0));
        assert!(!orbit.update(1.4), "entering the band from outside keeps false");
        assert!(orbit.update(1.3), "at the inner radius orbiting starts");

        for i in 0..100 {
            let distance = if i % 2 == 0 { 1.31 } else { 1.49 };
            assert!(orbit.update(distance), "flickered at tick {i}");
        }

        assert!(orbit.update(1.5), "exactly at outer radius still holds");
        assert!(!orbit.update(1.51));
        for i in 0..100 {
            let distance = if i % 2 == 0 { 1.31 } else { 1.49 };
            assert!(!orbit.update(distance), "flickered at tick {i}");
        }
    }

    #[test]
    fn test_orbit_offset_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let orbit = OrbitState::new(2.0, 0.2, &mut rng);
            assert!((0.0..1.0).contains(&orbit.offset()));
        }
        assert_eq!(OrbitState::new(0.0, 0.2, &mut rng).offset(), 0.0);
    }

    #[test]
    fn test_orbit_offset_reproducible() {
        let config = SteeringConfig::default();
        let a = SteeringAgent::new(config.clone(), None, None, &mut ChaCha8Rng::seed_from_u64(99))
            .unwrap();
        let b = SteeringAgent::new(config, None, None, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(a.orbit_state().offset(), b.orbit_state().offset());
    }

    // ---- ObstacleSensor ----

    #[test]
    fn test_sensor_penalty_ratios() {
        let set = DirectionSet::new(16).unwrap();
        let mut world = CollisionWorld::new();
        pin_obstacle(&mut world, &set, 4, 0.24, None);

        let mut field = set.field();
        sensor().apply(&mut field, &world, Vec2::ZERO, false);

        let p = 1.0 - 0.24 / 0.48;
        let w: Vec<f32> = field.iter().map(|s| s.weight).collect();
        assert!((w[4] + p).abs() < 1e-4, "center penalty {}", w[4]);
        assert!((w[3] - w[4] / 2.0).abs() < 1e-4);
        assert!((w[5] - w[4] / 2.0).abs() < 1e-4);
        assert!((w[2] - w[4] / 3.0).abs() < 1e-4);
        assert!((w[6] - w[4] / 3.0).abs() < 1e-4);
        for (i, weight) in w.iter().enumerate() {
            if !(2..=6).contains(&i) {
                assert_eq!(*weight, 0.0, "direction {i} should be untouched");
            }
        }
    }

    #[test]
    fn test_sensor_penalty_wraps() {
        let set = DirectionSet::new(8).unwrap();
        let mut world = CollisionWorld::new();
        pin_obstacle(&mut world, &set, 0, 0.0, None);

        let mut field = set.field();
        sensor().apply(&mut field, &world, Vec2::ZERO, false);
        let w: Vec<f32> = field.iter().map(|s| s.weight).collect();
        assert!((w[0] + 1.0).abs() < 1e-4);
        assert!((w[7] + 0.5).abs() < 1e-4);
        assert!((w[6] + 1.0 / 3.0).abs() < 1e-4);
        assert!((w[1] + 0.5).abs() < 1e-4);
        assert_eq!(w[4], 0.0);
    }

    #[test]
    fn test_sensor_rewards_clear_positive_only() {
        let world = CollisionWorld::new();
        let mut field = field_with(4, &[0.5, -0.5, 0.0, 0.9]);
        sensor().apply(&mut field, &world, Vec2::ZERO, false);
        assert!((field[0].weight - 0.65).abs() < EPS);
        assert_eq!(field[1].weight, -0.5);
        assert_eq!(field[2].weight, 0.0);
        // 0.9 * 1.3 saturates
        assert_eq!(field[3].weight, 1.0);
    }

    #[test]
    fn test_sensor_ignores_own_collider() {
        let mut world = CollisionWorld::new();
        // Larger than the ray offset, so every ray starts inside it
        let own = world.insert(
            Shape::Circle { radius: 0.3 },
            Vec2::ZERO,
            Layers::OBSTACLE,
            None,
        );

        let mut field = field_with(8, &[0.0; 8]);
        let blind = sensor();
        blind.apply(&mut field, &world, Vec2::ZERO, false);
        assert!(field.iter().all(|s| s.weight == -1.0));

        let mut field = field_with(8, &[0.0; 8]);
        let aware = ObstacleSensor {
            own_collider: Some(own),
            ..sensor()
        };
        aware.apply(&mut field, &world, Vec2::ZERO, false);
        assert!(field.iter().all(|s| s.weight == 0.0));
    }

    #[test]
    fn test_sensor_comrade_band_while_orbiting() {
        let set = DirectionSet::new(16).unwrap();
        let mut world = CollisionWorld::new();
        pin_obstacle(&mut world, &set, 4, 0.24, Some("Enemy"));
        let comrade = world.tags().lookup("Enemy");
        let tagged = ObstacleSensor {
            comrade,
            ..sensor()
        };

        // penalty 0.5 reshaped to 1 - |0.5 - 0.65| = 0.85
        let mut field = set.field();
        tagged.apply(&mut field, &world, Vec2::ZERO, true);
        assert!((field[4].weight + 0.85).abs() < 1e-4);

        let mut field = set.field();
        tagged.apply(&mut field, &world, Vec2::ZERO, false);
        assert!((field[4].weight + 0.5).abs() < 1e-4);

        // Untagged sensor treats it as a plain obstacle while orbiting
        let mut field = set.field();
        sensor().apply(&mut field, &world, Vec2::ZERO, true);
        assert!((field[4].weight + 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_sensor_weights_stay_saturated() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..50 {
            let mut world = CollisionWorld::new();
            for _ in 0..rng.gen_range(0..12) {
                let pos = Vec2::new(rng.gen_range(-0.8..0.8), rng.gen_range(-0.8..0.8));
                world.insert(
                    Shape::Circle {
                        radius: rng.gen_range(0.01..0.3),
                    },
                    pos,
                    Layers::OBSTACLE,
                    None,
                );
            }
            let n = rng.gen_range(4..=24);
            let weights: Vec<f32> = (0..n).map(|_| rng.gen_range(-5.0..5.0)).collect();
            let mut field = field_with(n, &weights);
            sensor().apply(&mut field, &world, Vec2::ZERO, rng.gen());
            assert!(field.iter().all(|s| (-1.0..=1.0).contains(&s.weight)));
        }
    }

    // ---- ObstructionLock ----

    fn default_lock() -> ObstructionLock {
        ObstructionLock::new(LockThresholds {
            detection: 0.1,
            max_change: 0.0,
            min_change: -0.8,
        })
    }

    #[test]
    fn test_lock_engages_below_threshold() {
        let mut lock = default_lock();
        let mut field = field_with(8, &[-0.2, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5]);
        let best = select_best(&field);
        let heading = lock.resolve(&mut field, best);
        assert_eq!(heading, field[0].direction);
        assert_eq!(lock.state(), LockState::Locked);
        assert_eq!(lock.escape(), Some((0, field[0].direction)));
    }

    #[test]
    fn test_lock_stays_clear_above_threshold() {
        let mut lock = default_lock();
        let mut field = field_with(8, &[0.5, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.2]);
        let best = select_best(&field);
        assert_eq!(lock.resolve(&mut field, best), field[0].direction);
        assert_eq!(lock.state(), LockState::Clear);
        // Field untouched while clear
        assert_eq!(field[2].weight, 0.0);
    }

    #[test]
    fn test_lock_holds_heading_next_tick() {
        let mut lock = default_lock();
        let mut field = field_with(8, &[-0.2, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5]);
        let best = select_best(&field);
        let escape = lock.resolve(&mut field, best);

        // Normal arg-max moves to +y, but nothing clears: keep the escape heading
        let mut field = field_with(8, &[-0.5, -0.9, -0.3, -0.9, -0.9, -0.9, -0.9, -0.9]);
        let best = select_best(&field);
        assert_eq!(best.index, 2);
        let heading = lock.resolve(&mut field, best);
        assert_eq!(heading, escape);
        assert!(lock.is_locked());
        // Bias was added in place
        assert!((field[0].weight + 0.1).abs() < EPS);
    }

    #[test]
    fn test_lock_updates_escape_when_better_direction_appears() {
        let mut lock = default_lock();
        let mut field = field_with(8, &[-0.2, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5]);
        let best = select_best(&field);
        lock.resolve(&mut field, best);

        // +y biased weight 0.05 beats max_change (0.0) but not detection (0.1)
        let mut field = field_with(8, &[-0.7, -0.9, 0.05, -0.9, -0.9, -0.9, -0.9, -0.9]);
        let best = select_best(&field);
        let heading = lock.resolve(&mut field, best);
        assert_eq!(heading, field[2].direction);
        assert_eq!(lock.escape().map(|(i, _)| i), Some(2));
        assert!(lock.is_locked());
    }

    #[test]
    fn test_lock_updates_escape_when_escape_collapses() {
        let mut lock = ObstructionLock::new(LockThresholds {
            detection: 0.1,
            max_change: 0.5,
            min_change: -0.5,
        });
        let mut field = field_with(8, &[-0.2, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5, -0.5]);
        let best = select_best(&field);
        lock.resolve(&mut field, best);

        // Escape weight -1.0 + 0.4 = -0.6 < min_change
        let mut field = field_with(8, &[-1.0, -1.0, -1.0, -1.0, -0.1, -1.0, -1.0, -1.0]);
        let best = select_best(&field);
        let heading = lock.resolve(&mut field, best);
        // -x gets -0.1 - 0.4 = -0.5; +/-45 deg get -1 + 0.28 = -0.72; index 4 wins
        assert_eq!(lock.escape().map(|(i, _)| i), Some(4));
        assert_eq!(heading, field[4].direction);
    }

    #[test]
    fn test_lock_releases_exactly_at_threshold() {
        let thresholds = LockThresholds {
            detection: 0.5,
            max_change: 2.0,
            min_change: -2.0,
        };

        // Escape weight 0.09 + 0.4 = 0.49: stays locked
        let mut lock = ObstructionLock::new(thresholds);
        let mut field = field_with(8, &[0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let best = select_best(&field);
        lock.resolve(&mut field, best);
        assert!(lock.is_locked());
        let mut field = field_with(8, &[0.09, 0.0, 0.45, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let best = select_best(&field);
        let heading = lock.resolve(&mut field, best);
        assert!(lock.is_locked());
        assert_eq!(heading, field[0].direction);

        // Escape weight 0.1 + 0.4 = 0.5: releases to the normal arg-max
        let mut field = field_with(8, &[0.1, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let best = select_best(&field);
        assert_eq!(best.index, 2);
        let heading = lock.resolve(&mut field, best);
        assert_eq!(lock.state(), LockState::Clear);
        assert_eq!(heading, field[2].direction);
    }

    // ---- LongRangeEstimator ----

    /// Two boxes stacked at x = 3 forming a barrier symmetric about the x axis.
    fn two_wall_world() -> CollisionWorld {
        let mut world = CollisionWorld::new();
        for y in [0.75, -0.75] {
            world.insert(
                Shape::Box {
                    half_extents: Vec2::new(0.25, 0.75),
                },
                Vec2::new(3.0, y),
                Layers::WALL,
                None,
            );
        }
        world
    }

    #[test]
    fn test_long_range_tie_break_picks_second_best() {
        let world = two_wall_world();
        let estimator = LongRangeEstimator {
            object_radius: 0.2,
            bias_threshold: 1.1,
        };
        let mut field = DirectionSet::new(16).unwrap().field();
        let heading = estimator.estimate(&mut field, &world, Vec2::ZERO, Vec2::new(6.0, 0.0));

        let (best, second) = select_top_two(&field);
        assert_ne!(best.index, second.index);
        assert!(
            (best.weight - second.weight).abs() < 1.1,
            "symmetric walls should give near-equal top two"
        );
        assert_eq!(heading, second.direction);
        assert!(heading.y.abs() > 0.5, "heading should detour around the barrier");
    }

    #[test]
    fn test_long_range_clear_gap_picks_best() {
        let world = two_wall_world();
        let estimator = LongRangeEstimator {
            object_radius: 0.2,
            bias_threshold: 0.0,
        };
        let mut field = DirectionSet::new(16).unwrap().field();
        let heading = estimator.estimate(&mut field, &world, Vec2::ZERO, Vec2::new(6.0, 0.0));
        let (best, _) = select_top_two(&field);
        assert_eq!(heading, best.direction);
    }

    #[test]
    fn test_long_range_open_field_heads_toward_target() {
        let world = CollisionWorld::new();
        let estimator = LongRangeEstimator {
            object_radius: 0.2,
            bias_threshold: 0.0,
        };
        let mut field = DirectionSet::new(8).unwrap().field();
        let heading = estimator.estimate(&mut field, &world, Vec2::ZERO, Vec2::new(0.0, 4.0));
        // Oblique directions also earn the line-of-sight bonus
        assert!(heading.y > 0.5);
        assert!(field[2].weight > field[6].weight);
        assert!(field.iter().all(|s| s.weight.is_finite()));
    }

    #[test]
    fn test_long_range_wall_penalizes_blocked_direction() {
        let world = two_wall_world();
        let estimator = LongRangeEstimator {
            object_radius: 0.2,
            bias_threshold: 0.0,
        };
        let mut field = DirectionSet::new(16).unwrap().field();
        estimator.estimate(&mut field, &world, Vec2::ZERO, Vec2::new(6.0, 0.0));
        // Straight at the barrier scores below sideways
        assert!(field[0].weight < field[4].weight);
    }

    #[test]
    fn test_long_range_target_at_center_is_finite() {
        let world = two_wall_world();
        let estimator = LongRangeEstimator {
            object_radius: 0.2,
            bias_threshold: 1.1,
        };
        let mut field = DirectionSet::new(8).unwrap().field();
        let heading = estimator.estimate(&mut field, &world, Vec2::ZERO, Vec2::ZERO);
        assert!(heading.is_finite());
        assert!((heading.length() - 1.0).abs() < EPS);
    }

    // ---- Motion & pause ----

    #[test]
    fn test_seek_open_field_scenario() {
        let config = SteeringConfig {
            num_of_weights: 8,
            desire_keep_same_dir: 0.0,
            ..Default::default()
        };
        let speed = config.speed;
        let mut agent = make_agent(config);
        let world = CollisionWorld::new();
        let target = Some(Vec2::new(5.0, 0.0));

        let mut last_vx = 0.0;
        for tick in 0..120 {
            let outcome = agent.seek(&ctx(Vec2::ZERO, tick as f64 * DT as f64), &world, target);
            assert!((agent.desired_heading() - Vec2::X).length() < EPS);
            let SteerOutcome::Moving { velocity } = outcome else {
                panic!("expected movement, got {outcome:?}");
            };
            assert_eq!(velocity.y, 0.0);
            assert!(velocity.x > last_vx, "velocity must grow monotonically");
            assert!(velocity.x <= speed);
            last_vx = velocity.x;
        }
        assert!(speed - last_vx < 0.01, "velocity should converge to speed");
    }

    #[test]
    fn test_heading_blend_not_renormalized() {
        let mut agent = make_agent(SteeringConfig {
            desire_keep_same_dir: 0.0,
            ..Default::default()
        });
        let world = CollisionWorld::new();
        for tick in 0..200 {
            agent.seek(&ctx(Vec2::ZERO, tick as f64 * 0.016), &world, Some(Vec2::new(5.0, 0.0)));
        }
        // Reverse: the blend passes through short vectors
        agent.seek(&ctx(Vec2::ZERO, 4.0), &world, Some(Vec2::new(-5.0, 0.0)));
        assert!(agent.current_heading().length() < 0.95);
    }

    #[test]
    fn test_pause_gate_restart_not_stacked() {
        let mut gate = PauseGate::default();
        gate.pause(0.0, 1.0);
        gate.pause(0.0, 0.5);
        assert!(!gate.poll(0.49));
        assert!(gate.poll(0.5));
        assert!(!gate.is_active());
        assert!(!gate.poll(1.0), "resume fires once");
    }

    #[test]
    fn test_agent_pause_then_shorter_pause() {
        let mut agent = make_agent(SteeringConfig::default());
        let world = CollisionWorld::new();
        let target = Some(Vec2::new(5.0, 0.0));

        agent.pause(0.0, 1.0);
        agent.pause(0.0, 0.5);
        assert_eq!(
            agent.seek(&ctx(Vec2::ZERO, 0.49), &world, target),
            SteerOutcome::Suspended
        );
        assert!((agent.pause_remaining(0.25) - 0.25).abs() < 1e-9);
        assert!(matches!(
            agent.seek(&ctx(Vec2::ZERO, 0.5), &world, target),
            SteerOutcome::Moving { .. }
        ));
        assert!(agent.can_move());
        assert!(!agent.is_paused());
    }

    #[test]
    fn test_agent_repause_restarts_from_second_call() {
        let mut agent = make_agent(SteeringConfig::default());
        let world = CollisionWorld::new();
        let target = Some(Vec2::new(5.0, 0.0));

        agent.pause(0.0, 1.0);
        agent.pause(0.2, 0.5);
        assert_eq!(
            agent.seek(&ctx(Vec2::ZERO, 0.69), &world, target),
            SteerOutcome::Suspended
        );
        assert!(matches!(
            agent.seek(&ctx(Vec2::ZERO, 0.7), &world, target),
            SteerOutcome::Moving { .. }
        ));
    }

    // ---- Agent edge cases ----

    #[test]
    fn test_agent_no_target_is_noop() {
        let mut agent = make_agent(SteeringConfig::default());
        let world = CollisionWorld::new();
        assert_eq!(
            agent.seek(&ctx(Vec2::ZERO, 0.0), &world, None),
            SteerOutcome::NoTarget
        );
        assert_eq!(
            agent.orbit(&ctx(Vec2::ZERO, 0.0), &world, None),
            SteerOutcome::NoTarget
        );
        assert_eq!(agent.current_heading(), Vec2::ZERO);
    }

    #[test]
    fn test_agent_arrival_stops() {
        let mut agent = make_agent(SteeringConfig::default());
        let world = CollisionWorld::new();
        let outcome = agent.seek(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::new(0.03, 0.0)));
        assert_eq!(outcome, SteerOutcome::Arrived);
        assert_eq!(outcome.velocity(), Some(Vec2::ZERO));
    }

    #[test]
    fn test_agent_cannot_move() {
        let mut agent = make_agent(SteeringConfig::default());
        let world = CollisionWorld::new();
        agent.set_can_move(false);
        assert_eq!(
            agent.seek(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::X)),
            SteerOutcome::Suspended
        );
        agent.set_can_move(true);
        assert!(matches!(
            agent.seek(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::X)),
            SteerOutcome::Moving { .. }
        ));
    }

    #[test]
    fn test_agent_set_speed() {
        let mut agent = make_agent(SteeringConfig::default());
        let world = CollisionWorld::new();
        agent.set_speed(10.0);
        let SteerOutcome::Moving { velocity } =
            agent.seek(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::new(5.0, 0.0)))
        else {
            panic!("expected movement");
        };
        let expected = agent.current_heading() * 10.0;
        assert!((velocity - expected).length() < EPS);
        assert_eq!(agent.config().speed, 10.0);
    }

    #[test]
    fn test_agent_orbits_tangentially() {
        let mut agent = make_agent(SteeringConfig {
            desire_keep_same_dir: 0.0,
            ..Default::default()
        });
        let world = CollisionWorld::new();
        // Target 0.9 to the left, inside the 1.0 ring
        agent.orbit(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::new(-0.9, 0.0)));
        assert!(agent.is_orbiting());
        assert!(agent.desired_heading().dot(Vec2::X).abs() < EPS);
        assert!((agent.desired_heading() - Vec2::Y).length() < EPS);
    }

    #[test]
    fn test_agent_orbit_far_away_seeks() {
        let mut agent = make_agent(SteeringConfig {
            num_of_weights: 8,
            desire_keep_same_dir: 0.0,
            ..Default::default()
        });
        let world = CollisionWorld::new();
        agent.orbit(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::new(0.0, 8.0)));
        assert!(!agent.is_orbiting());
        assert!((agent.desired_heading() - Vec2::Y).length() < EPS);
    }

    #[test]
    fn test_agent_direct_path_and_indirect_fallback() {
        let world = two_wall_world();
        let target = Vec2::new(6.0, 0.0);
        let mut agent = make_agent(SteeringConfig {
            desire_keep_same_dir: 0.0,
            ..Default::default()
        });
        assert!(!agent.has_direct_path(&world, Vec2::ZERO, target));
        assert!(agent.has_direct_path(&world, Vec2::ZERO, Vec2::new(2.0, 0.0)));

        agent.steer(&ctx(Vec2::ZERO, 0.0), &world, TravelMode::Seek, Some(target));
        assert!(
            agent.desired_heading().y.abs() > 0.3,
            "blocked seek should detour, got {:?}",
            agent.desired_heading()
        );
        assert!(agent.long_range().iter().any(|s| s.weight != 0.0));

        // Plain seek ignores walls it cannot sense
        let mut plain = make_agent(SteeringConfig {
            desire_keep_same_dir: 0.0,
            ..Default::default()
        });
        plain.seek(&ctx(Vec2::ZERO, 0.0), &world, Some(target));
        assert!((plain.desired_heading() - Vec2::X).length() < EPS);
    }

    #[test]
    fn test_agent_locks_when_boxed_in() {
        let mut world = CollisionWorld::new();
        // Ring of obstacles hugging the agent on every side
        let set = DirectionSet::new(16).unwrap();
        for d in set.iter() {
            world.insert(
                Shape::Circle { radius: 0.05 },
                d * 0.3,
                Layers::OBSTACLE,
                None,
            );
        }
        let mut agent = make_agent(SteeringConfig::default());
        agent.seek(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::new(5.0, 0.0)));
        assert!(agent.is_locked());
        assert_eq!(agent.lock_state(), LockState::Locked);
    }

    #[test]
    fn test_agent_lock_can_be_disabled() {
        let mut world = CollisionWorld::new();
        let set = DirectionSet::new(16).unwrap();
        for d in set.iter() {
            world.insert(
                Shape::Circle { radius: 0.05 },
                d * 0.3,
                Layers::OBSTACLE,
                None,
            );
        }
        let mut agent = make_agent(SteeringConfig {
            use_obstruction_lock: false,
            ..Default::default()
        });
        agent.seek(&ctx(Vec2::ZERO, 0.0), &world, Some(Vec2::new(5.0, 0.0)));
        assert!(!agent.is_locked());
    }

    #[test]
    fn test_agent_snapshot_is_projection() {
        let mut agent = make_agent(SteeringConfig::default());
        let world = two_wall_world();
        agent.steer(
            &ctx(Vec2::ZERO, 0.0),
            &world,
            TravelMode::Seek,
            Some(Vec2::new(6.0, 0.0)),
        );
        let before = agent.short_range().to_vec();
        let snap = agent.snapshot(Vec2::new(1.0, 1.0));
        assert_eq!(snap.short_range, before);
        assert_eq!(snap.long_range.len(), 16);
        assert_eq!(snap.center, Vec2::new(1.0, 1.0));
        assert_eq!(agent.short_range(), before.as_slice());
    }

    #[test]
    fn test_agent_rejects_bad_config() {
        let config = SteeringConfig {
            num_of_weights: 30,
            ..Default::default()
        };
        let result = SteeringAgent::new(config, None, None, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(matches!(result, Err(ConfigError::DirectionCount(30))));
    }
}
