use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::models::{
    validate_owner_id, ExerciseStat, PerformedSet, STATISTICS_WINDOW_DAYS, UNKNOWN_EXERCISE_TYPE,
};
use crate::repositories::{ExerciseTypeLookup, PerformedSetQuery, Repositories, WorkoutQuery};
use crate::services::ServiceError;

/// Per-exercise-type statistics over the trailing window.
///
/// Holds no state between calls; each request re-reads the stores.
#[derive(Clone)]
pub struct StatisticsService {
    workouts: Arc<dyn WorkoutQuery>,
    performed_sets: Arc<dyn PerformedSetQuery>,
    exercise_types: Arc<dyn ExerciseTypeLookup>,
}

impl StatisticsService {
    pub fn new(
        workouts: Arc<dyn WorkoutQuery>,
        performed_sets: Arc<dyn PerformedSetQuery>,
        exercise_types: Arc<dyn ExerciseTypeLookup>,
    ) -> Self {
        Self {
            workouts,
            performed_sets,
            exercise_types,
        }
    }

    pub fn from_repositories(repositories: &Repositories) -> Self {
        Self::new(
            repositories.workout_query.clone(),
            repositories.performed_set_query.clone(),
            repositories.exercise_type_lookup.clone(),
        )
    }

    /// Inclusive lower bound of the window ending at `as_of`.
    pub fn window_start(as_of: DateTime<Utc>) -> DateTime<Utc> {
        as_of - Duration::days(STATISTICS_WINDOW_DAYS)
    }

    /// Aggregates the user's performed sets from workouts started within the window,
    /// ordered by exercise type id.
    #[tracing::instrument(skip(self))]
    pub async fn compute_statistics(
        &self,
        user_id: &str,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<ExerciseStat>, ServiceError> {
        validate_owner_id(user_id)
            .map_err(|_| ServiceError::InvalidArgument("user id cannot be empty".to_string()))?;

        let window_start = Self::window_start(as_of);
        let workout_ids: Vec<i64> = self
            .workouts
            .find_started_since(user_id, window_start)
            .await?
            .into_iter()
            .map(|workout| workout.id)
            .collect();

        if workout_ids.is_empty() {
            debug!(%window_start, "No workouts in statistics window");
            return Ok(Vec::new());
        }

        let (sets, names) = futures::try_join!(
            self.performed_sets.find_by_workout_ids(&workout_ids),
            self.exercise_types.find_names()
        )?;

        let names: HashMap<i64, String> = names.into_iter().map(|n| (n.id, n.name)).collect();
        let stats = aggregate_performed_sets(&sets, &names);

        info!(
            workouts = workout_ids.len(),
            performed_sets = sets.len(),
            exercise_types = stats.len(),
            "Computed exercise statistics"
        );

        Ok(stats)
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    count: i64,
    repetitions: i64,
    weight_sum: f64,
    max_weight: f64,
}

/// Groups sets by exercise type. Names missing from `names` fall back to a placeholder.
pub fn aggregate_performed_sets(
    sets: &[PerformedSet],
    names: &HashMap<i64, String>,
) -> Vec<ExerciseStat> {
    let mut groups: BTreeMap<i64, Accumulator> = BTreeMap::new();

    for set in sets {
        let group = groups.entry(set.exercise_type_id).or_default();
        if group.count == 0 || set.weight > group.max_weight {
            group.max_weight = set.weight;
        }
        group.count += 1;
        group.repetitions += set.repetitions();
        group.weight_sum += set.weight;
    }

    groups
        .into_iter()
        .map(|(exercise_type_id, group)| {
            let exercise_type_name = match names.get(&exercise_type_id) {
                Some(name) => name.clone(),
                None => {
                    debug!(exercise_type_id, "Performed sets reference a missing exercise type");
                    UNKNOWN_EXERCISE_TYPE.to_string()
                }
            };

            ExerciseStat {
                exercise_type_id,
                exercise_type_name,
                times_performed: group.count,
                total_repetitions: group.repetitions,
                average_weight: group.weight_sum / group.count as f64,
                max_weight: group.max_weight,
            }
        })
        .collect()
}
