use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::models::{Workout, WorkoutRequest};
use crate::repositories::WorkoutRepository;
use crate::services::ServiceError;

#[derive(Clone)]
pub struct WorkoutService {
    workouts: Arc<dyn WorkoutRepository>,
}

impl WorkoutService {
    pub fn new(workouts: Arc<dyn WorkoutRepository>) -> Self {
        Self { workouts }
    }

    pub async fn list(&self, owner_id: &str) -> Result<Vec<Workout>, ServiceError> {
        Ok(self.workouts.list_workouts(owner_id).await?)
    }

    pub async fn get(&self, owner_id: &str, id: i64) -> Result<Workout, ServiceError> {
        self.workouts
            .find_workout(owner_id, id)
            .await?
            .ok_or(ServiceError::NotFound("Workout"))
    }

    pub async fn create(&self, owner_id: &str, request: WorkoutRequest) -> Result<Workout, ServiceError> {
        request.validate()?;
        let workout = self.workouts.insert_workout(owner_id, request).await?;
        info!(workout_id = workout.id, "Created workout");
        Ok(workout)
    }

    pub async fn update(
        &self,
        owner_id: &str,
        id: i64,
        request: WorkoutRequest,
    ) -> Result<Workout, ServiceError> {
        request.validate()?;
        self.workouts
            .update_workout(owner_id, id, request)
            .await?
            .ok_or(ServiceError::NotFound("Workout"))
    }

    /// Removes the workout and every performed set logged in it.
    pub async fn delete(&self, owner_id: &str, id: i64) -> Result<(), ServiceError> {
        if !self.workouts.delete_workout(owner_id, id).await? {
            return Err(ServiceError::NotFound("Workout"));
        }
        info!(workout_id = id, "Deleted workout with its performed sets");
        Ok(())
    }
}
