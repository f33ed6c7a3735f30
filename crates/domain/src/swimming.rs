use crate::{
    ActivityType, ParameterError, Training, TrainingBase, error::positive, training::M_IN_KM,
};

/// Length of one stroke in metres.
const LEN_STROKE: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    /// Metres
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            length_pool: positive("pool length", length_pool)?,
            count_pool,
        })
    }

    #[must_use]
    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    #[must_use]
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn activity_type(&self) -> ActivityType {
        ActivityType::Swimming
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    /// Speed over the swum pool lengths, independent of the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
    }
}
