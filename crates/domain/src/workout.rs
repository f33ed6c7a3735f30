use std::str::FromStr;

use log::{debug, warn};

use crate::{
    ActivityType, ParameterError, Running, SportsWalking, Swimming, Training, TrainingBase,
    TrainingError, error::count,
};

/// A training session of any supported activity.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! delegate {
    ($self: ident, $training: ident => $expr: expr) => {
        match $self {
            Workout::Running($training) => $expr,
            Workout::SportsWalking($training) => $expr,
            Workout::Swimming($training) => $expr,
        }
    };
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        delegate!(self, t => t.base())
    }

    fn activity_type(&self) -> ActivityType {
        delegate!(self, t => t.activity_type())
    }

    fn spent_calories(&self) -> f64 {
        delegate!(self, t => t.spent_calories())
    }

    fn step_length(&self) -> f64 {
        delegate!(self, t => t.step_length())
    }

    fn distance(&self) -> f64 {
        delegate!(self, t => t.distance())
    }

    fn mean_speed(&self) -> f64 {
        delegate!(self, t => t.mean_speed())
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

/// Create a workout from a sensor package.
///
/// The values of `data` are bound in order to the parameters of the activity:
///
///  - `RUN`: action, duration, weight
///  - `WLK`: action, duration, weight, height
///  - `SWM`: action, duration, weight, pool length, pool count
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, TrainingError> {
    let Ok(activity) = ActivityType::from_str(code) else {
        warn!("rejected package with unknown activity type {code:?}");
        return Err(TrainingError::InvalidActivityType(code.to_string()));
    };

    match build(activity, data) {
        Ok(workout) => {
            debug!("read {activity} package {data:?}");
            Ok(workout)
        }
        Err(err) => {
            warn!("rejected {activity} package {data:?}: {err}");
            Err(err.for_activity(activity))
        }
    }
}

fn build(activity: ActivityType, data: &[f64]) -> Result<Workout, ParameterError> {
    if data.len() != activity.parameter_count() {
        return Err(ParameterError::Count {
            expected: activity.parameter_count(),
            actual: data.len(),
        });
    }

    let action = count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    Ok(match activity {
        ActivityType::Running => Running::new(action, duration, weight)?.into(),
        ActivityType::SportsWalking => {
            SportsWalking::new(action, duration, weight, data[3])?.into()
        }
        ActivityType::Swimming => Swimming::new(
            action,
            duration,
            weight,
            data[3],
            count("pool count", data[4])?,
        )?
        .into(),
    })
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::WorkoutRecord;

    #[rstest]
    #[case::swimming(
        "SWM",
        vec![720.0, 1.0, 80.0, 25.0, 40.0],
        Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap())
    )]
    #[case::running(
        "RUN",
        vec![15000.0, 1.0, 75.0],
        Workout::Running(Running::new(15000, 1.0, 75.0).unwrap())
    )]
    #[case::walking(
        "WLK",
        vec![9000.0, 1.0, 75.0, 180.0],
        Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap())
    )]
    fn test_read_package(#[case] code: &str, #[case] data: Vec<f64>, #[case] expected: Workout) {
        assert_eq!(read_package(code, &data), Ok(expected));
    }

    #[rstest]
    #[case::no_values(vec![])]
    #[case::running_values(vec![15000.0, 1.0, 75.0])]
    #[case::swimming_values(vec![720.0, 1.0, 80.0, 25.0, 40.0])]
    fn test_read_package_invalid_activity_type(#[case] data: Vec<f64>) {
        assert_eq!(
            read_package("XYZ", &data),
            Err(TrainingError::InvalidActivityType("XYZ".to_string()))
        );
    }

    #[rstest]
    #[case::too_few("RUN", vec![15000.0, 1.0], ParameterError::Count { expected: 3, actual: 2 })]
    #[case::too_many(
        "RUN",
        vec![15000.0, 1.0, 75.0, 180.0],
        ParameterError::Count { expected: 3, actual: 4 }
    )]
    #[case::walking_without_height(
        "WLK",
        vec![9000.0, 1.0, 75.0],
        ParameterError::Count { expected: 4, actual: 3 }
    )]
    #[case::swimming_without_pool(
        "SWM",
        vec![720.0, 1.0, 80.0],
        ParameterError::Count { expected: 5, actual: 3 }
    )]
    #[case::fractional_action("RUN", vec![150.5, 1.0, 75.0], ParameterError::NotACount("action"))]
    #[case::negative_action("WLK", vec![-1.0, 1.0, 75.0, 180.0], ParameterError::NotACount("action"))]
    #[case::zero_duration("RUN", vec![15000.0, 0.0, 75.0], ParameterError::NotPositive("duration"))]
    #[case::zero_height("WLK", vec![9000.0, 1.0, 75.0, 0.0], ParameterError::NotPositive("height"))]
    #[case::fractional_pool_count(
        "SWM",
        vec![720.0, 1.0, 80.0, 25.0, 40.5],
        ParameterError::NotACount("pool count")
    )]
    #[case::negative_pool_length(
        "SWM",
        vec![720.0, 1.0, 80.0, -25.0, 40.0],
        ParameterError::NotPositive("pool length")
    )]
    fn test_read_package_invalid_parameters(
        #[case] code: &str,
        #[case] data: Vec<f64>,
        #[case] reason: ParameterError,
    ) {
        assert_eq!(
            read_package(code, &data),
            Err(TrainingError::InvalidParameters {
                activity: ActivityType::from_str(code).unwrap(),
                reason
            })
        );
    }

    #[test]
    fn test_workout_report() {
        let packages: [(&str, &[f64]); 3] = [
            ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            ("RUN", &[15000.0, 1.0, 75.0]),
            ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];

        assert_eq!(
            packages
                .iter()
                .map(|(code, data)| read_package(code, data).unwrap().report().message())
                .collect::<Vec<_>>(),
            vec![
                "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                 Mean speed: 1.000 km/h; Calories burned: 336.000.",
                "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                 Mean speed: 9.750 km/h; Calories burned: 699.750.",
                "Activity type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                 Mean speed: 5.850 km/h; Calories burned: 157.500.",
            ]
        );
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let WorkoutRecord {
            label,
            duration,
            distance,
            speed,
            calories,
        } = workout.report();

        assert_eq!(workout.activity_type(), ActivityType::Swimming);
        assert_approx_eq!(workout.step_length(), 1.38);
        assert_eq!(label, "Swimming");
        assert_approx_eq!(duration, 1.0);
        assert_approx_eq!(distance, 0.9936);
        assert_approx_eq!(speed, 1.0);
        assert_approx_eq!(calories, 336.0);
    }
}
