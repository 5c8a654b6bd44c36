use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::validation::validate_workout_times;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: i64,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/replace payload. The owner always comes from the session, never the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_workout_times", skip_on_field_errors = false))]
pub struct WorkoutRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[validate(length(max = 1000, message = "Notes may have at most 1000 characters"))]
    pub notes: Option<String>,
}

/// Minimal projection used when selecting workouts for the statistics window.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct WorkoutWindowEntry {
    pub id: i64,
    pub start_time: DateTime<Utc>,
}
