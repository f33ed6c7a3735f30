use crate::ActivityType;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrainingError {
    #[error("Unknown activity type {0:?}")]
    InvalidActivityType(String),
    #[error("Invalid parameters for {activity}: {reason}")]
    InvalidParameters {
        activity: ActivityType,
        reason: ParameterError,
    },
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("expected {expected} values, got {actual}")]
    Count { expected: usize, actual: usize },
    #[error("{0} must be a non-negative integer")]
    NotACount(&'static str),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

impl ParameterError {
    pub(crate) fn for_activity(self, activity: ActivityType) -> TrainingError {
        TrainingError::InvalidParameters {
            activity,
            reason: self,
        }
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = finite(name, value)?;

    if value <= 0.0 {
        return Err(ParameterError::NotPositive(name));
    }

    Ok(value)
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite(name));
    }

    Ok(value)
}

pub(crate) fn count(name: &'static str, value: f64) -> Result<u32, ParameterError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ParameterError::NotACount(name));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}
