use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ExerciseType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
}

/// Payload for creating or replacing a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExerciseTypeRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    pub name: String,
    #[validate(length(max = 500, message = "Description may have at most 500 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 50, message = "Muscle group may have at most 50 characters"))]
    pub muscle_group: Option<String>,
}

/// The slice of a catalog entry the statistics engine needs for display.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ExerciseTypeName {
    pub id: i64,
    pub name: String,
}
