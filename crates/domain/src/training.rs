use crate::{
    ActivityType, ParameterError, WorkoutRecord,
    error::{finite, positive},
};

/// Length of one step in metres.
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Parameters shared by all activities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes
    pub action: u32,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: finite("weight", weight)?,
        })
    }

    #[must_use]
    pub fn duration_in_minutes(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

pub trait Training {
    fn base(&self) -> &TrainingBase;

    fn activity_type(&self) -> ActivityType;

    /// Kilocalories spent during the session.
    fn spent_calories(&self) -> f64;

    /// Distance covered by one action in metres.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometres.
    fn distance(&self) -> f64 {
        f64::from(self.base().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in kilometres per hour.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    #[must_use]
    fn report(&self) -> WorkoutRecord {
        WorkoutRecord {
            label: self.activity_type().label(),
            duration: self.base().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Floor division of two floats.
///
/// The quotient is derived from the floating-point remainder rather than from
/// `(a / b).floor()`, which gives a different result when `a / b` rounds up to
/// the next integer.
#[must_use]
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floor = div.floor();

    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
