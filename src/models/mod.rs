// Data models for the exercise catalog, workouts and statistics

pub mod exercise_type;
pub mod workout;
pub mod performed_set;
pub mod statistics;
pub mod validation;

pub use exercise_type::*;
pub use workout::*;
pub use performed_set::*;
pub use statistics::*;
pub use validation::*;
