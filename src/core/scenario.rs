use serde::Serialize;
use thiserror::Error;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;
pub const DEFAULT_MONKEY_HEIGHT_M: f64 = 5.0;
pub const DEFAULT_SHOOTER_DISTANCE_M: f64 = 10.0;

/// Smallest value accepted for any scenario parameter.
pub const MIN_PARAMETER: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScenarioError {
    #[error("Invalid {field}: {value} is not a finite number.")]
    NotFinite { field: &'static str, value: f64 },
    #[error("Invalid {field}: {value}. Height, distance, and gravity must be at least 1.")]
    BelowMinimum { field: &'static str, value: f64 },
}

/// The three physical parameters of one run.
///
/// Built through [`Scenario::new`], so every instance satisfies the
/// "at least 1" domain rule for all fields.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scenario {
    monkey_height_m: f64,
    shooter_distance_m: f64,
    gravity_mps2: f64,
}

impl Scenario {
    pub fn new(
        monkey_height_m: f64,
        shooter_distance_m: f64,
        gravity_mps2: f64,
    ) -> Result<Self, ScenarioError> {
        check_parameter("height", monkey_height_m)?;
        check_parameter("distance", shooter_distance_m)?;
        check_parameter("gravity", gravity_mps2)?;

        Ok(Self {
            monkey_height_m,
            shooter_distance_m,
            gravity_mps2,
        })
    }

    pub fn monkey_height_m(&self) -> f64 {
        self.monkey_height_m
    }

    pub fn shooter_distance_m(&self) -> f64 {
        self.shooter_distance_m
    }

    pub fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            monkey_height_m: DEFAULT_MONKEY_HEIGHT_M,
            shooter_distance_m: DEFAULT_SHOOTER_DISTANCE_M,
            gravity_mps2: EARTH_GRAVITY_MPS2,
        }
    }
}

fn check_parameter(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if !value.is_finite() {
        return Err(ScenarioError::NotFinite { field, value });
    }
    if value < MIN_PARAMETER {
        return Err(ScenarioError::BelowMinimum { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Scenario, ScenarioError};

    #[test]
    fn accepts_values_at_the_minimum() {
        let scenario = Scenario::new(1.0, 1.0, 1.0).expect("minimum values are valid");
        assert_eq!(scenario.monkey_height_m(), 1.0);
        assert_eq!(scenario.shooter_distance_m(), 1.0);
        assert_eq!(scenario.gravity_mps2(), 1.0);
    }

    #[test]
    fn rejects_values_below_one() {
        let err = Scenario::new(5.0, 0.5, 9.81).expect_err("distance below 1 must fail");
        assert_eq!(
            err,
            ScenarioError::BelowMinimum {
                field: "distance",
                value: 0.5
            }
        );
        assert!(err.to_string().contains("must be at least 1"));
    }

    #[test]
    fn rejects_non_finite_gravity() {
        let err = Scenario::new(5.0, 10.0, f64::NAN).expect_err("NaN gravity must fail");
        assert!(matches!(
            err,
            ScenarioError::NotFinite {
                field: "gravity",
                ..
            }
        ));
    }

    #[test]
    fn default_matches_the_classic_setup() {
        let scenario = Scenario::default();
        assert_eq!(scenario.monkey_height_m(), 5.0);
        assert_eq!(scenario.shooter_distance_m(), 10.0);
        assert_eq!(scenario.gravity_mps2(), 9.81);
    }
}
