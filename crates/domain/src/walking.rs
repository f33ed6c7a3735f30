use crate::{
    ActivityType, ParameterError, Training, TrainingBase, error::positive, training::floor_div,
};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    /// Centimetres
    height: f64,
}

impl SportsWalking {
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        height: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            height: positive("height", height)?,
        })
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn activity_type(&self) -> ActivityType {
        ActivityType::SportsWalking
    }

    /// The speed-to-height ratio is floored, so only whole multiples contribute.
    fn spent_calories(&self) -> f64 {
        (CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + floor_div(self.mean_speed().powi(2), self.height)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight)
            * self.base.duration_in_minutes()
    }
}
