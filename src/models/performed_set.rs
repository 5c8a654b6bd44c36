use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// One logged `sets x reps @ weight` entry inside a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PerformedSet {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_type_id: i64,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

impl PerformedSet {
    pub fn repetitions(&self) -> i64 {
        i64::from(self.sets) * i64::from(self.reps)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePerformedSet {
    pub workout_id: i64,
    pub exercise_type_id: i64,
    #[validate(range(min = 1, max = 20, message = "Sets must be between 1 and 20"))]
    pub sets: i32,
    #[validate(range(min = 1, max = 100, message = "Reps must be between 1 and 100"))]
    pub reps: i32,
    #[validate(range(min = 0.1, max = 500.0, message = "Weight must be between 0.1 and 500 kg"))]
    pub weight: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct PerformedSetFilter {
    /// Restrict the listing to a single workout
    pub workout_id: Option<i64>,
}
