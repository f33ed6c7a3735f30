use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Activity type as encoded by the sensor unit.
#[derive(AsRefStr, Display, EnumIter, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    #[strum(serialize = "SWM")]
    Swimming,
    #[strum(serialize = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    SportsWalking,
}

impl ActivityType {
    /// Label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Swimming => "Swimming",
            ActivityType::Running => "Running",
            ActivityType::SportsWalking => "SportsWalking",
        }
    }

    /// Number of raw values a package of this type carries.
    #[must_use]
    pub fn parameter_count(self) -> usize {
        match self {
            ActivityType::Running => 3,
            ActivityType::SportsWalking => 4,
            ActivityType::Swimming => 5,
        }
    }
}
