use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::models::{ExerciseType, ExerciseTypeRequest};
use crate::repositories::ExerciseTypeRepository;
use crate::services::ServiceError;

/// Global exercise catalog. Mutations are admin-only; the router enforces the role.
#[derive(Clone)]
pub struct ExerciseTypeService {
    exercise_types: Arc<dyn ExerciseTypeRepository>,
}

impl ExerciseTypeService {
    pub fn new(exercise_types: Arc<dyn ExerciseTypeRepository>) -> Self {
        Self { exercise_types }
    }

    pub async fn list(&self) -> Result<Vec<ExerciseType>, ServiceError> {
        Ok(self.exercise_types.list_exercise_types().await?)
    }

    pub async fn get(&self, id: i64) -> Result<ExerciseType, ServiceError> {
        self.exercise_types
            .find_exercise_type(id)
            .await?
            .ok_or(ServiceError::NotFound("Exercise type"))
    }

    pub async fn create(&self, request: ExerciseTypeRequest) -> Result<ExerciseType, ServiceError> {
        request.validate()?;
        let exercise_type = self.exercise_types.insert_exercise_type(request).await?;
        info!(exercise_type_id = exercise_type.id, "Created exercise type");
        Ok(exercise_type)
    }

    pub async fn update(&self, id: i64, request: ExerciseTypeRequest) -> Result<ExerciseType, ServiceError> {
        request.validate()?;
        self.exercise_types
            .update_exercise_type(id, request)
            .await?
            .ok_or(ServiceError::NotFound("Exercise type"))
    }

    /// Performed sets keep their reference; statistics report them under a placeholder name.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.exercise_types.delete_exercise_type(id).await? {
            return Err(ServiceError::NotFound("Exercise type"));
        }
        info!(exercise_type_id = id, "Deleted exercise type");
        Ok(())
    }
}
