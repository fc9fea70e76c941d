use serde::Serialize;

use super::scenario::Scenario;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Launch velocity derived from a [`Scenario`], aimed along the line of sight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaunchSolution {
    /// Horizontal component: `distance / sqrt(2 * height / gravity)`.
    pub initial_velocity_mps: f64,
    /// Vertical component needed to point the muzzle at the monkey.
    pub vertical_velocity_mps: f64,
    pub aim_angle_rad: f64,
}

impl LaunchSolution {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let height = scenario.monkey_height_m();
        let distance = scenario.shooter_distance_m();
        let fall_time_s = (2.0 * height / scenario.gravity_mps2()).sqrt();
        let initial_velocity_mps = distance / fall_time_s;

        Self {
            initial_velocity_mps,
            vertical_velocity_mps: initial_velocity_mps * height / distance,
            aim_angle_rad: (height / distance).atan(),
        }
    }

    pub fn launch_speed_mps(&self) -> f64 {
        self.initial_velocity_mps.hypot(self.vertical_velocity_mps)
    }

    pub fn aim_angle_deg(&self) -> f64 {
        self.aim_angle_rad.to_degrees()
    }
}

/// One evenly spaced point along both paths.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PathSample {
    pub time_s: f64,
    pub projectile: Point2,
    pub target_height_m: f64,
}

/// A solved scenario: the launch solution plus the position functions of time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    scenario: Scenario,
    solution: LaunchSolution,
}

impl Trajectory {
    pub fn solve(scenario: Scenario) -> Self {
        Self {
            scenario,
            solution: LaunchSolution::from_scenario(&scenario),
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn solution(&self) -> &LaunchSolution {
        &self.solution
    }

    pub fn projectile_distance(&self, time_s: f64) -> f64 {
        self.solution.initial_velocity_mps * time_s
    }

    pub fn projectile_height(&self, time_s: f64) -> f64 {
        (self.solution.vertical_velocity_mps * time_s) - self.fall_since_launch(time_s)
    }

    pub fn projectile_at(&self, time_s: f64) -> Point2 {
        Point2::new(
            self.projectile_distance(time_s),
            self.projectile_height(time_s),
        )
    }

    pub fn target_height(&self, time_s: f64) -> f64 {
        self.scenario.monkey_height_m() - self.fall_since_launch(time_s)
    }

    pub fn target_at(&self, time_s: f64) -> Point2 {
        Point2::new(
            self.scenario.shooter_distance_m(),
            self.target_height(time_s),
        )
    }

    /// Time at which the shot reaches the monkey's horizontal position.
    pub fn intercept_time_s(&self) -> f64 {
        self.scenario.shooter_distance_m() / self.solution.initial_velocity_mps
    }

    /// Splits `0..=span_s` into `intervals` equal steps (at least 2) and
    /// returns the `intervals + 1` boundary points.
    pub fn sample(&self, span_s: f64, intervals: usize) -> Vec<PathSample> {
        let intervals = intervals.max(2);
        (0..=intervals)
            .map(|i| {
                let t = (i as f64 * span_s) / intervals as f64;
                PathSample {
                    time_s: t,
                    projectile: self.projectile_at(t),
                    target_height_m: self.target_height(t),
                }
            })
            .collect()
    }

    fn fall_since_launch(&self, time_s: f64) -> f64 {
        0.5 * self.scenario.gravity_mps2() * time_s * time_s
    }
}

#[cfg(test)]
mod tests {
    use super::Trajectory;
    use crate::core::scenario::Scenario;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn classic() -> Trajectory {
        Trajectory::solve(Scenario::new(5.0, 10.0, 9.81).expect("valid scenario"))
    }

    #[test]
    fn computes_known_launch_velocity() {
        let trajectory = classic();
        let solution = trajectory.solution();

        assert_close(solution.initial_velocity_mps, 9.9045, 0.001);
        assert_close(solution.vertical_velocity_mps, 4.9523, 0.001);
        assert_close(solution.aim_angle_deg(), 26.565, 0.001);
        assert_close(trajectory.intercept_time_s(), 1.00964, 0.0001);
    }

    #[test]
    fn paths_meet_at_intercept_time() {
        let trajectory = classic();
        let t = trajectory.intercept_time_s();

        assert_close(trajectory.projectile_distance(t), 10.0, 1e-9);
        assert_close(
            trajectory.projectile_height(t),
            trajectory.target_height(t),
            1e-9,
        );
    }

    #[test]
    fn both_bodies_lose_the_same_height() {
        let trajectory = classic();
        let t = 0.4;
        let projectile_drop = trajectory.solution().vertical_velocity_mps * t
            - trajectory.projectile_height(t);
        let target_drop = trajectory.scenario().monkey_height_m() - trajectory.target_height(t);

        assert_close(projectile_drop, target_drop, 1e-12);
        assert_close(target_drop, 0.5 * 9.81 * t * t, 1e-12);
    }

    #[test]
    fn starts_at_the_muzzle_and_the_branch() {
        let trajectory = classic();
        let shot = trajectory.projectile_at(0.0);
        let monkey = trajectory.target_at(0.0);

        assert_eq!((shot.x, shot.y), (0.0, 0.0));
        assert_eq!((monkey.x, monkey.y), (10.0, 5.0));
    }

    #[test]
    fn sampling_covers_the_requested_span() {
        let trajectory = classic();
        assert_eq!(trajectory.sample(1.0, 10).len(), 11);

        // Fewer than two intervals is raised to two.
        let samples = trajectory.sample(2.0, 1);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].time_s, 0.0);
        assert_close(samples[1].time_s, 1.0, 1e-12);
        assert_close(samples[2].time_s, 2.0, 1e-12);
        assert_close(samples[2].target_height_m, 5.0 - 0.5 * 9.81 * 4.0, 1e-9);
    }
}
