#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod activity;
mod error;
mod record;
mod running;
mod swimming;
pub mod training;
mod walking;
mod workout;

pub use activity::ActivityType;
pub use error::{ParameterError, TrainingError};
pub use record::WorkoutRecord;
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Training, TrainingBase, floor_div};
pub use walking::SportsWalking;
pub use workout::{Workout, read_package};
