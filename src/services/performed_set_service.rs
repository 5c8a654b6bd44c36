use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::models::{CreatePerformedSet, PerformedSet};
use crate::repositories::{ExerciseTypeRepository, PerformedSetRepository};
use crate::services::ServiceError;

#[derive(Clone)]
pub struct PerformedSetService {
    performed_sets: Arc<dyn PerformedSetRepository>,
    exercise_types: Arc<dyn ExerciseTypeRepository>,
}

impl PerformedSetService {
    pub fn new(
        performed_sets: Arc<dyn PerformedSetRepository>,
        exercise_types: Arc<dyn ExerciseTypeRepository>,
    ) -> Self {
        Self {
            performed_sets,
            exercise_types,
        }
    }

    pub async fn list(&self, owner_id: &str, workout_id: Option<i64>) -> Result<Vec<PerformedSet>, ServiceError> {
        Ok(self.performed_sets.list_performed_sets(owner_id, workout_id).await?)
    }

    pub async fn get(&self, owner_id: &str, id: i64) -> Result<PerformedSet, ServiceError> {
        self.performed_sets
            .find_performed_set(owner_id, id)
            .await?
            .ok_or(ServiceError::NotFound("Performed exercise"))
    }

    /// Logs a set against one of the caller's own workouts.
    pub async fn create(
        &self,
        owner_id: &str,
        request: CreatePerformedSet,
    ) -> Result<PerformedSet, ServiceError> {
        request.validate()?;

        if self
            .exercise_types
            .find_exercise_type(request.exercise_type_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::InvalidReference("Exercise type not found".to_string()));
        }

        let workout_id = request.workout_id;
        let Some(set) = self.performed_sets.insert_performed_set(owner_id, request).await? else {
            warn!(workout_id, "Rejected performed set for a workout the caller does not own");
            return Err(ServiceError::InvalidReference("Workout not found".to_string()));
        };

        info!(performed_set_id = set.id, workout_id = set.workout_id, "Logged performed set");
        Ok(set)
    }

    pub async fn delete(&self, owner_id: &str, id: i64) -> Result<(), ServiceError> {
        if !self.performed_sets.delete_performed_set(owner_id, id).await? {
            return Err(ServiceError::NotFound("Performed exercise"));
        }
        info!(performed_set_id = id, "Deleted performed set");
        Ok(())
    }
}
