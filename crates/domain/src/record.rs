use derive_more::Display;

/// Metrics of a completed training session.
#[derive(Debug, Display, Clone, PartialEq)]
#[display(
    "Activity type: {label}; \
     Duration: {duration:.3} h; \
     Distance: {distance:.3} km; \
     Mean speed: {speed:.3} km/h; \
     Calories burned: {calories:.3}."
)]
pub struct WorkoutRecord {
    pub label: &'static str,
    /// Hours
    pub duration: f64,
    /// Kilometres
    pub distance: f64,
    /// Kilometres per hour
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl WorkoutRecord {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
