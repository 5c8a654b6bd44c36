// Data-access contracts and their Postgres / in-memory backends

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{
    CreatePerformedSet, ExerciseType, ExerciseTypeName, ExerciseTypeRequest, PerformedSet,
    Workout, WorkoutRequest, WorkoutWindowEntry,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Workout lookups needed by the statistics window.
#[async_trait]
pub trait WorkoutQuery: Send + Sync {
    /// Workouts owned by `owner_id` that started at or after `start_at_or_after`.
    async fn find_started_since(
        &self,
        owner_id: &str,
        start_at_or_after: DateTime<Utc>,
    ) -> StoreResult<Vec<WorkoutWindowEntry>>;
}

/// Performed-set lookups needed by the statistics window.
#[async_trait]
pub trait PerformedSetQuery: Send + Sync {
    async fn find_by_workout_ids(&self, workout_ids: &[i64]) -> StoreResult<Vec<PerformedSet>>;
}

/// Catalog display names.
#[async_trait]
pub trait ExerciseTypeLookup: Send + Sync {
    async fn find_names(&self) -> StoreResult<Vec<ExerciseTypeName>>;
}

#[async_trait]
pub trait ExerciseTypeRepository: ExerciseTypeLookup {
    async fn list_exercise_types(&self) -> StoreResult<Vec<ExerciseType>>;
    async fn find_exercise_type(&self, id: i64) -> StoreResult<Option<ExerciseType>>;
    async fn count_exercise_types(&self) -> StoreResult<i64>;
    async fn insert_exercise_type(&self, request: ExerciseTypeRequest) -> StoreResult<ExerciseType>;
    async fn update_exercise_type(
        &self,
        id: i64,
        request: ExerciseTypeRequest,
    ) -> StoreResult<Option<ExerciseType>>;
    async fn delete_exercise_type(&self, id: i64) -> StoreResult<bool>;
}

/// Every method is scoped by owner; another user's workout behaves as missing.
#[async_trait]
pub trait WorkoutRepository: WorkoutQuery {
    async fn list_workouts(&self, owner_id: &str) -> StoreResult<Vec<Workout>>;
    async fn find_workout(&self, owner_id: &str, id: i64) -> StoreResult<Option<Workout>>;
    async fn insert_workout(&self, owner_id: &str, request: WorkoutRequest) -> StoreResult<Workout>;
    async fn update_workout(
        &self,
        owner_id: &str,
        id: i64,
        request: WorkoutRequest,
    ) -> StoreResult<Option<Workout>>;
    /// Deletes the workout together with its performed sets.
    async fn delete_workout(&self, owner_id: &str, id: i64) -> StoreResult<bool>;
}

/// Ownership is resolved through the parent workout.
#[async_trait]
pub trait PerformedSetRepository: PerformedSetQuery {
    async fn list_performed_sets(
        &self,
        owner_id: &str,
        workout_id: Option<i64>,
    ) -> StoreResult<Vec<PerformedSet>>;
    async fn find_performed_set(&self, owner_id: &str, id: i64) -> StoreResult<Option<PerformedSet>>;
    /// Inserts only if the workout exists and belongs to `owner_id`, checked atomically
    /// with the insert. `None` means the workout is missing or someone else's.
    async fn insert_performed_set(
        &self,
        owner_id: &str,
        request: CreatePerformedSet,
    ) -> StoreResult<Option<PerformedSet>>;
    async fn delete_performed_set(&self, owner_id: &str, id: i64) -> StoreResult<bool>;
}

/// The three stores behind one backend, handed out as trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub exercise_types: Arc<dyn ExerciseTypeRepository>,
    pub workouts: Arc<dyn WorkoutRepository>,
    pub performed_sets: Arc<dyn PerformedSetRepository>,
    pub exercise_type_lookup: Arc<dyn ExerciseTypeLookup>,
    pub workout_query: Arc<dyn WorkoutQuery>,
    pub performed_set_query: Arc<dyn PerformedSetQuery>,
}

impl Repositories {
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ExerciseTypeRepository + WorkoutRepository + PerformedSetRepository + 'static,
    {
        Self {
            exercise_types: store.clone(),
            workouts: store.clone(),
            performed_sets: store.clone(),
            exercise_type_lookup: store.clone(),
            workout_query: store.clone(),
            performed_set_query: store,
        }
    }

    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryStore::new()))
    }

    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self::from_store(Arc::new(PgStore::new(pool)))
    }
}
