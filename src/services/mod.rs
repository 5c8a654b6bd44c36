// Business logic services

pub mod error;
pub mod exercise_type_service;
pub mod workout_service;
pub mod performed_set_service;
pub mod statistics_service;

pub use error::ServiceError;
pub use exercise_type_service::ExerciseTypeService;
pub use workout_service::WorkoutService;
pub use performed_set_service::PerformedSetService;
pub use statistics_service::StatisticsService;
