use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{
    ExerciseTypeLookup, ExerciseTypeRepository, PerformedSetQuery, PerformedSetRepository,
    StoreResult, WorkoutQuery, WorkoutRepository,
};
use crate::models::{
    CreatePerformedSet, ExerciseType, ExerciseTypeName, ExerciseTypeRequest, PerformedSet,
    Workout, WorkoutRequest, WorkoutWindowEntry,
};

const WORKOUT_COLUMNS: &str = "id, user_id, start_time, end_time, notes, created_at, updated_at";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const PERFORMED_SET_COLUMNS: &str =
    "ps.id, ps.workout_id, ps.exercise_type_id, ps.sets, ps.reps, ps.weight, ps.created_at";

/// PostgreSQL-backed store. Queries are checked at runtime so the crate builds without a database.
#[derive(Debug, Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExerciseTypeLookup for PgStore {
    async fn find_names(&self) -> StoreResult<Vec<ExerciseTypeName>> {
        let names = sqlx::query_as::<_, ExerciseTypeName>("SELECT id, name FROM exercise_types")
            .fetch_all(&self.db)
            .await?;

        Ok(names)
    }
}

#[async_trait]
impl ExerciseTypeRepository for PgStore {
    async fn list_exercise_types(&self) -> StoreResult<Vec<ExerciseType>> {
        let exercise_types = sqlx::query_as::<_, ExerciseType>(
            "SELECT id, name, description, muscle_group FROM exercise_types ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(exercise_types)
    }

    async fn find_exercise_type(&self, id: i64) -> StoreResult<Option<ExerciseType>> {
        let exercise_type = sqlx::query_as::<_, ExerciseType>(
            "SELECT id, name, description, muscle_group FROM exercise_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(exercise_type)
    }

    async fn count_exercise_types(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercise_types")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    async fn insert_exercise_type(&self, request: ExerciseTypeRequest) -> StoreResult<ExerciseType> {
        let exercise_type = sqlx::query_as::<_, ExerciseType>(
            "INSERT INTO exercise_types (name, description, muscle_group)
             VALUES ($1, $2, $3)
             RETURNING id, name, description, muscle_group",
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.muscle_group)
        .fetch_one(&self.db)
        .await?;

        Ok(exercise_type)
    }

    async fn update_exercise_type(
        &self,
        id: i64,
        request: ExerciseTypeRequest,
    ) -> StoreResult<Option<ExerciseType>> {
        let exercise_type = sqlx::query_as::<_, ExerciseType>(
            "UPDATE exercise_types
             SET name = $2, description = $3, muscle_group = $4
             WHERE id = $1
             RETURNING id, name, description, muscle_group",
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.muscle_group)
        .fetch_optional(&self.db)
        .await?;

        Ok(exercise_type)
    }

    async fn delete_exercise_type(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM exercise_types WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl WorkoutQuery for PgStore {
    async fn find_started_since(
        &self,
        owner_id: &str,
        start_at_or_after: DateTime<Utc>,
    ) -> StoreResult<Vec<WorkoutWindowEntry>> {
        let entries = sqlx::query_as::<_, WorkoutWindowEntry>(
            "SELECT id, start_time FROM workouts WHERE user_id = $1 AND start_time >= $2",
        )
        .bind(owner_id)
        .bind(start_at_or_after)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }
}

#[async_trait]
impl WorkoutRepository for PgStore {
    async fn list_workouts(&self, owner_id: &str) -> StoreResult<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = $1 ORDER BY start_time DESC, id DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(workouts)
    }

    async fn find_workout(&self, owner_id: &str, id: i64) -> StoreResult<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(workout)
    }

    async fn insert_workout(&self, owner_id: &str, request: WorkoutRequest) -> StoreResult<Workout> {
        let now = Utc::now();

        let workout = sqlx::query_as::<_, Workout>(&format!(
            "INSERT INTO workouts (user_id, start_time, end_time, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {WORKOUT_COLUMNS}"
        ))
        .bind(owner_id)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(&request.notes)
        .bind(now)
        .fetch_one(&self.db)
        .await?;

        Ok(workout)
    }

    async fn update_workout(
        &self,
        owner_id: &str,
        id: i64,
        request: WorkoutRequest,
    ) -> StoreResult<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            "UPDATE workouts
             SET start_time = $3, end_time = $4, notes = $5, updated_at = $6
             WHERE id = $1 AND user_id = $2
             RETURNING {WORKOUT_COLUMNS}"
        ))
        .bind(id)
        .bind(owner_id)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(&request.notes)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(workout)
    }

    async fn delete_workout(&self, owner_id: &str, id: i64) -> StoreResult<bool> {
        let mut tx = self.db.begin().await?;

        // Sets go first; the foreign key cascades too.
        sqlx::query(
            "DELETE FROM performed_sets
             WHERE workout_id IN (SELECT id FROM workouts WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PerformedSetQuery for PgStore {
    async fn find_by_workout_ids(&self, workout_ids: &[i64]) -> StoreResult<Vec<PerformedSet>> {
        let sets = sqlx::query_as::<_, PerformedSet>(&format!(
            "SELECT {PERFORMED_SET_COLUMNS} FROM performed_sets ps WHERE ps.workout_id = ANY($1)"
        ))
        .bind(workout_ids)
        .fetch_all(&self.db)
        .await?;

        Ok(sets)
    }
}

#[async_trait]
impl PerformedSetRepository for PgStore {
    async fn list_performed_sets(
        &self,
        owner_id: &str,
        workout_id: Option<i64>,
    ) -> StoreResult<Vec<PerformedSet>> {
        let sets = sqlx::query_as::<_, PerformedSet>(&format!(
            "SELECT {PERFORMED_SET_COLUMNS}
             FROM performed_sets ps
             JOIN workouts w ON w.id = ps.workout_id
             WHERE w.user_id = $1 AND ($2::BIGINT IS NULL OR ps.workout_id = $2)
             ORDER BY ps.id"
        ))
        .bind(owner_id)
        .bind(workout_id)
        .fetch_all(&self.db)
        .await?;

        Ok(sets)
    }

    async fn find_performed_set(&self, owner_id: &str, id: i64) -> StoreResult<Option<PerformedSet>> {
        let set = sqlx::query_as::<_, PerformedSet>(&format!(
            "SELECT {PERFORMED_SET_COLUMNS}
             FROM performed_sets ps
             JOIN workouts w ON w.id = ps.workout_id
             WHERE ps.id = $1 AND w.user_id = $2"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(set)
    }

    async fn insert_performed_set(
        &self,
        owner_id: &str,
        request: CreatePerformedSet,
    ) -> StoreResult<Option<PerformedSet>> {
        let result = sqlx::query_as::<_, PerformedSet>(
            "INSERT INTO performed_sets (workout_id, exercise_type_id, sets, reps, weight, created_at)
             SELECT w.id, $2, $3, $4, $5, $6 FROM workouts w WHERE w.id = $1 AND w.user_id = $7
             RETURNING id, workout_id, exercise_type_id, sets, reps, weight, created_at",
        )
        .bind(request.workout_id)
        .bind(request.exercise_type_id)
        .bind(request.sets)
        .bind(request.reps)
        .bind(request.weight)
        .bind(Utc::now())
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await;

        match result {
            Ok(set) => Ok(set),
            // The workout was deleted between the SELECT and the foreign key check
            Err(sqlx::Error::Database(err)) if err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_performed_set(&self, owner_id: &str, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(
            "DELETE FROM performed_sets ps
             USING workouts w
             WHERE ps.id = $1 AND w.id = ps.workout_id AND w.user_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
