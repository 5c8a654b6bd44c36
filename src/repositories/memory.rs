use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{
    ExerciseTypeLookup, ExerciseTypeRepository, PerformedSetQuery, PerformedSetRepository,
    StoreResult, WorkoutQuery, WorkoutRepository,
};
use crate::models::{
    CreatePerformedSet, ExerciseType, ExerciseTypeName, ExerciseTypeRequest, PerformedSet,
    Workout, WorkoutRequest, WorkoutWindowEntry,
};

#[derive(Debug, Default)]
struct Tables {
    exercise_types: BTreeMap<i64, ExerciseType>,
    workouts: BTreeMap<i64, Workout>,
    performed_sets: BTreeMap<i64, PerformedSet>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn owned_workout_ids(&self, owner_id: &str) -> HashSet<i64> {
        self.workouts
            .values()
            .filter(|w| w.user_id == owner_id)
            .map(|w| w.id)
            .collect()
    }
}

/// Process-local store backing tests and the `memory` storage backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseTypeLookup for MemoryStore {
    async fn find_names(&self) -> StoreResult<Vec<ExerciseTypeName>> {
        let tables = self.tables.read().await;
        Ok(tables
            .exercise_types
            .values()
            .map(|et| ExerciseTypeName { id: et.id, name: et.name.clone() })
            .collect())
    }
}

#[async_trait]
impl ExerciseTypeRepository for MemoryStore {
    async fn list_exercise_types(&self) -> StoreResult<Vec<ExerciseType>> {
        Ok(self.tables.read().await.exercise_types.values().cloned().collect())
    }

    async fn find_exercise_type(&self, id: i64) -> StoreResult<Option<ExerciseType>> {
        Ok(self.tables.read().await.exercise_types.get(&id).cloned())
    }

    async fn count_exercise_types(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.exercise_types.len() as i64)
    }

    async fn insert_exercise_type(&self, request: ExerciseTypeRequest) -> StoreResult<ExerciseType> {
        let mut tables = self.tables.write().await;
        let exercise_type = ExerciseType {
            id: tables.next_id(),
            name: request.name,
            description: request.description,
            muscle_group: request.muscle_group,
        };
        tables.exercise_types.insert(exercise_type.id, exercise_type.clone());
        Ok(exercise_type)
    }

    async fn update_exercise_type(
        &self,
        id: i64,
        request: ExerciseTypeRequest,
    ) -> StoreResult<Option<ExerciseType>> {
        let mut tables = self.tables.write().await;
        Ok(tables.exercise_types.get_mut(&id).map(|existing| {
            existing.name = request.name;
            existing.description = request.description;
            existing.muscle_group = request.muscle_group;
            existing.clone()
        }))
    }

    async fn delete_exercise_type(&self, id: i64) -> StoreResult<bool> {
        Ok(self.tables.write().await.exercise_types.remove(&id).is_some())
    }
}

#[async_trait]
impl WorkoutQuery for MemoryStore {
    async fn find_started_since(
        &self,
        owner_id: &str,
        start_at_or_after: DateTime<Utc>,
    ) -> StoreResult<Vec<WorkoutWindowEntry>> {
        let tables = self.tables.read().await;
        Ok(tables
            .workouts
            .values()
            .filter(|w| w.user_id == owner_id && w.start_time >= start_at_or_after)
            .map(|w| WorkoutWindowEntry { id: w.id, start_time: w.start_time })
            .collect())
    }
}

#[async_trait]
impl WorkoutRepository for MemoryStore {
    async fn list_workouts(&self, owner_id: &str) -> StoreResult<Vec<Workout>> {
        let tables = self.tables.read().await;
        let mut workouts: Vec<Workout> = tables
            .workouts
            .values()
            .filter(|w| w.user_id == owner_id)
            .cloned()
            .collect();
        workouts.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        Ok(workouts)
    }

    async fn find_workout(&self, owner_id: &str, id: i64) -> StoreResult<Option<Workout>> {
        let tables = self.tables.read().await;
        Ok(tables.workouts.get(&id).filter(|w| w.user_id == owner_id).cloned())
    }

    async fn insert_workout(&self, owner_id: &str, request: WorkoutRequest) -> StoreResult<Workout> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let workout = Workout {
            id: tables.next_id(),
            user_id: owner_id.to_string(),
            start_time: request.start_time,
            end_time: request.end_time,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };
        tables.workouts.insert(workout.id, workout.clone());
        Ok(workout)
    }

    async fn update_workout(
        &self,
        owner_id: &str,
        id: i64,
        request: WorkoutRequest,
    ) -> StoreResult<Option<Workout>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .workouts
            .get_mut(&id)
            .filter(|w| w.user_id == owner_id)
            .map(|existing| {
                existing.start_time = request.start_time;
                existing.end_time = request.end_time;
                existing.notes = request.notes;
                existing.updated_at = Utc::now();
                existing.clone()
            }))
    }

    async fn delete_workout(&self, owner_id: &str, id: i64) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let owned = tables.workouts.get(&id).is_some_and(|w| w.user_id == owner_id);
        if !owned {
            return Ok(false);
        }
        tables.workouts.remove(&id);
        tables.performed_sets.retain(|_, set| set.workout_id != id);
        Ok(true)
    }
}

#[async_trait]
impl PerformedSetQuery for MemoryStore {
    async fn find_by_workout_ids(&self, workout_ids: &[i64]) -> StoreResult<Vec<PerformedSet>> {
        let tables = self.tables.read().await;
        Ok(tables
            .performed_sets
            .values()
            .filter(|set| workout_ids.contains(&set.workout_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PerformedSetRepository for MemoryStore {
    async fn list_performed_sets(
        &self,
        owner_id: &str,
        workout_id: Option<i64>,
    ) -> StoreResult<Vec<PerformedSet>> {
        let tables = self.tables.read().await;
        let owned = tables.owned_workout_ids(owner_id);
        Ok(tables
            .performed_sets
            .values()
            .filter(|set| owned.contains(&set.workout_id))
            .filter(|set| workout_id.map_or(true, |id| set.workout_id == id))
            .cloned()
            .collect())
    }

    async fn find_performed_set(&self, owner_id: &str, id: i64) -> StoreResult<Option<PerformedSet>> {
        let tables = self.tables.read().await;
        let owned = tables.owned_workout_ids(owner_id);
        Ok(tables
            .performed_sets
            .get(&id)
            .filter(|set| owned.contains(&set.workout_id))
            .cloned())
    }

    async fn insert_performed_set(
        &self,
        owner_id: &str,
        request: CreatePerformedSet,
    ) -> StoreResult<Option<PerformedSet>> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .workouts
            .get(&request.workout_id)
            .is_some_and(|w| w.user_id == owner_id);
        if !owned {
            return Ok(None);
        }

        let set = PerformedSet {
            id: tables.next_id(),
            workout_id: request.workout_id,
            exercise_type_id: request.exercise_type_id,
            sets: request.sets,
            reps: request.reps,
            weight: request.weight,
            created_at: Utc::now(),
        };
        tables.performed_sets.insert(set.id, set.clone());
        Ok(Some(set))
    }

    async fn delete_performed_set(&self, owner_id: &str, id: i64) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let owned = tables.owned_workout_ids(owner_id);
        let visible = tables
            .performed_sets
            .get(&id)
            .is_some_and(|set| owned.contains(&set.workout_id));
        if visible {
            tables.performed_sets.remove(&id);
        }
        Ok(visible)
    }
}
