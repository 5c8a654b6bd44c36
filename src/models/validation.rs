use std::borrow::Cow;

use validator::ValidationError;

use crate::models::WorkoutRequest;

/// A workout cannot end before it starts.
pub fn validate_workout_times(workout: &WorkoutRequest) -> Result<(), ValidationError> {
    if workout.end_time < workout.start_time {
        let mut error = ValidationError::new("end_before_start");
        error.message = Some(Cow::Borrowed("End time cannot be earlier than start time"));
        return Err(error);
    }
    Ok(())
}

/// Required text fields must contain something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("Value cannot be blank"));
        return Err(error);
    }
    Ok(())
}

/// Owner identities are opaque, but never blank.
pub fn validate_owner_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.trim().is_empty() {
        let mut error = ValidationError::new("empty_user_id");
        error.message = Some(Cow::Borrowed("User id cannot be empty"));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreatePerformedSet, ExerciseTypeRequest};
    use chrono::{Duration, Utc};
    use validator::Validate;

    fn performed_set(sets: i32, reps: i32, weight: f64) -> CreatePerformedSet {
        CreatePerformedSet {
            workout_id: 1,
            exercise_type_id: 1,
            sets,
            reps,
            weight,
        }
    }

    #[test]
    fn test_performed_set_ranges() {
        assert!(performed_set(1, 1, 0.1).validate().is_ok());
        assert!(performed_set(20, 100, 500.0).validate().is_ok());
        assert!(performed_set(0, 10, 50.0).validate().is_err());
        assert!(performed_set(21, 10, 50.0).validate().is_err());
        assert!(performed_set(3, 0, 50.0).validate().is_err());
        assert!(performed_set(3, 101, 50.0).validate().is_err());
        assert!(performed_set(3, 10, 0.0).validate().is_err());
        assert!(performed_set(3, 10, 500.5).validate().is_err());
    }

    #[test]
    fn test_exercise_type_lengths() {
        let valid = ExerciseTypeRequest {
            name: "Bench press".to_string(),
            description: None,
            muscle_group: Some("Chest".to_string()),
        };
        assert!(valid.validate().is_ok());

        let empty_name = ExerciseTypeRequest { name: String::new(), ..valid.clone() };
        assert!(empty_name.validate().is_err());

        let blank_name = ExerciseTypeRequest { name: "   ".to_string(), ..valid.clone() };
        let errors = blank_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let long_group = ExerciseTypeRequest { muscle_group: Some("x".repeat(51)), ..valid.clone() };
        assert!(long_group.validate().is_err());

        let long_description = ExerciseTypeRequest { description: Some("x".repeat(501)), ..valid };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_workout_times() {
        let start = Utc::now();
        let ok = WorkoutRequest { start_time: start, end_time: start + Duration::hours(1), notes: None };
        assert!(ok.validate().is_ok());

        let reversed = WorkoutRequest { start_time: start, end_time: start - Duration::minutes(1), notes: None };
        assert!(reversed.validate().is_err());

        let long_notes = WorkoutRequest { notes: Some("n".repeat(1001)), ..ok };
        assert!(long_notes.validate().is_err());
    }

    #[test]
    fn test_owner_id_validation() {
        assert!(validate_owner_id("user-1").is_ok());
        assert!(validate_owner_id("").is_err());
        assert!(validate_owner_id("   ").is_err());
    }
}
