use monkey_hunter::core::ballistics::Trajectory;
use monkey_hunter::core::clock::{ClockPhase, SimulationClock};
use monkey_hunter::core::scenario::Scenario;
use monkey_hunter::core::window::{
    MIN_SCALE_PX_PER_M, SceneExtent, ViewportScaler, ViewportSize, tick_interval,
};
use proptest::prelude::*;

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    (1.0f64..2_000.0, 1.0f64..5_000.0, 1.0f64..50.0).prop_map(|(height, distance, gravity)| {
        Scenario::new(height, distance, gravity).expect("generated values are at least 1")
    })
}

// =============================================================================
// Trajectory properties
// =============================================================================

proptest! {
    #[test]
    fn shot_and_monkey_meet_at_the_tree(scenario in scenario_strategy()) {
        let trajectory = Trajectory::solve(scenario);
        let t = scenario.shooter_distance_m() / trajectory.solution().initial_velocity_mps;

        let gap = (trajectory.projectile_height(t) - trajectory.target_height(t)).abs();
        prop_assert!(gap < 1e-9, "heights differ by {} at t={}", gap, t);
    }

    #[test]
    fn monkey_only_falls(
        scenario in scenario_strategy(),
        t in 0.0f64..100.0,
        dt in 1e-3f64..1.0,
    ) {
        let trajectory = Trajectory::solve(scenario);
        prop_assert!(trajectory.target_height(t + dt) < trajectory.target_height(t));
    }

    #[test]
    fn fixed_ticks_always_end_in_a_hit(scenario in scenario_strategy()) {
        let mut clock = SimulationClock::new();
        clock.start(scenario);
        let phase = clock.run_to_end(200_000);

        prop_assert_eq!(phase, ClockPhase::Hit);
        let state = clock.state();
        prop_assert!((state.projectile.x - scenario.shooter_distance_m()).abs() < 1e-6);
        prop_assert!((state.projectile.y - state.target.y).abs() < 1e-6);
    }
}

// =============================================================================
// Viewport scaling properties
// =============================================================================

fn viewport_strategy() -> impl Strategy<Value = ViewportSize> {
    (100.0f64..4_000.0, 80.0f64..3_000.0).prop_map(|(w, h)| ViewportSize::new(w, h))
}

fn scene_strategy() -> impl Strategy<Value = SceneExtent> {
    (1.0f64..100_000.0, 1.0f64..100_000.0).prop_map(|(w, h)| SceneExtent::new(w, h))
}

proptest! {
    #[test]
    fn rescale_is_idempotent(
        viewport in viewport_strategy(),
        scene in scene_strategy(),
        start_x in 1.0f64..512.0,
        start_y in 1.0f64..512.0,
    ) {
        let mut scaler = ViewportScaler::new().with_scale(start_x, start_y);
        let first = scaler.rescale(viewport, scene);
        let second = scaler.rescale(viewport, scene);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scale_never_drops_below_floor(
        viewport in viewport_strategy(),
        scene in scene_strategy(),
        start_x in 1.0f64..512.0,
        start_y in 1.0f64..512.0,
    ) {
        let mut scaler = ViewportScaler::new().with_scale(start_x, start_y);
        if let Some(mapping) = scaler.rescale(viewport, scene).mapping() {
            prop_assert!(mapping.scale_x >= MIN_SCALE_PX_PER_M);
            prop_assert!(mapping.scale_y >= MIN_SCALE_PX_PER_M);
        }
        let (scale_x, scale_y) = scaler.scale();
        prop_assert!(scale_x >= MIN_SCALE_PX_PER_M && scale_y >= MIN_SCALE_PX_PER_M);
    }

    #[test]
    fn visible_range_keeps_headroom(
        viewport in viewport_strategy(),
        scene in scene_strategy(),
    ) {
        let mut scaler = ViewportScaler::new();
        if let Some(mapping) = scaler.rescale(viewport, scene).mapping() {
            prop_assert!(mapping.visible_max_x >= scene.width_m * 1.2);
            prop_assert!(mapping.visible_max_y >= scene.height_m * 1.2);
        }
    }

    #[test]
    fn tick_interval_is_monotonic(a in 0.0f64..20_000.0, b in 0.0f64..20_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tick_interval(low) <= tick_interval(high));
    }

    #[test]
    fn at_most_a_handful_of_ticks_below_5000(max in 0.0f64..5_000.0) {
        let interval = f64::from(tick_interval(max));
        prop_assert!((max / interval).floor() <= 20.0);
    }
}
