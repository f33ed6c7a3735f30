use crate::{ActivityType, ParameterError, Training, TrainingBase, training::M_IN_KM};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn activity_type(&self) -> ActivityType {
        ActivityType::Running
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration_in_minutes()
    }
}
