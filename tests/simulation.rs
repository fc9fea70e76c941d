use monkey_hunter::core::ballistics::Point2;
use monkey_hunter::core::clock::{ClockConfig, ClockPhase, SimulationClock, TICK_S};
use monkey_hunter::core::scenario::Scenario;
use monkey_hunter::core::window::{SceneExtent, ViewportScaler, ViewportSize};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={actual}, expected={expected}, tolerance={tolerance}"
    );
}

#[test]
fn host_loop_fires_tracks_and_draws_the_scene() {
    let scenario = Scenario::new(5.0, 10.0, 9.81).expect("valid scenario");
    let mut clock = SimulationClock::with_config(ClockConfig {
        time_limit_s: Some(60.0),
    });
    let mut scaler = ViewportScaler::new();
    let viewport = ViewportSize::new(800.0, 600.0);

    clock.start(scenario);
    let mut ticks = 0;
    while !clock.state().is_terminated() {
        clock.tick();
        ticks += 1;

        let mapping = scaler
            .rescale(viewport, SceneExtent::from(&scenario))
            .mapping()
            .expect("viewport is ready");
        let stone = mapping.to_screen(clock.state().projectile);
        let monkey = mapping.to_screen(clock.state().target);
        assert!(stone.x >= 0.0 && stone.x <= viewport.width_px);
        assert!(monkey.y >= 0.0 && monkey.y <= viewport.height_px);
    }

    assert_eq!(clock.phase(), ClockPhase::Hit);
    assert_eq!(ticks, 51);
    assert_eq!(scaler.scale(), (40.0, 40.0));
    assert_close(clock.state().elapsed_s, ticks as f64 * TICK_S, 1e-9);
}

#[test]
fn updating_the_scenario_rescales_and_restarts() {
    let mut clock = SimulationClock::new();
    let mut scaler = ViewportScaler::new();
    let viewport = ViewportSize::new(800.0, 600.0);

    let small = Scenario::default();
    clock.start(small);
    clock.run_to_end(1_000);
    scaler.rescale(viewport, SceneExtent::from(&small));
    assert_eq!(scaler.scale(), (40.0, 40.0));

    let tall = Scenario::new(300.0, 120.0, 9.81).expect("valid scenario");
    clock.start(tall);
    assert_eq!(clock.phase(), ClockPhase::Running);
    let mapping = scaler
        .rescale(viewport, SceneExtent::from(&tall))
        .mapping()
        .expect("viewport is ready");

    // 120 m * 40 overflows 710 px -> 5; 300 m * 40 overflows 540 px -> 1.25.
    assert_eq!((mapping.scale_x, mapping.scale_y), (5.0, 1.25));
    let branch = mapping.to_screen(Point2::new(120.0, 300.0));
    assert!(branch.x <= 800.0 && branch.y >= 0.0);

    assert_eq!(clock.run_to_end(10_000), ClockPhase::Hit);
    assert_close(
        clock.state().intercept_time_s.expect("hit time recorded"),
        (2.0 * 300.0 / 9.81f64).sqrt(),
        1e-9,
    );
}

#[test]
fn reset_returns_to_idle_and_accepts_a_new_run() {
    let mut clock = SimulationClock::new();
    clock.start(Scenario::default());
    clock.tick();
    clock.reset();

    assert_eq!(clock.tick(), ClockPhase::Idle);
    clock.start(Scenario::default());
    assert_eq!(clock.tick(), ClockPhase::Running);
}
