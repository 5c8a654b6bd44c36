use std::sync::Arc;

use anyhow::Result;

use crate::models::ExerciseTypeRequest;
use crate::repositories::ExerciseTypeRepository;

const DEFAULT_EXERCISE_TYPES: [(&str, &str, &str); 7] = [
    ("Bench press", "Chest", "Barbell press lying on a flat bench"),
    ("Squat", "Legs", "Barbell back squat to parallel or below"),
    ("Deadlift", "Back", "Conventional barbell deadlift from the floor"),
    ("Pull-up", "Back", "Bodyweight pull-up from a dead hang"),
    ("Overhead press", "Shoulders", "Standing barbell press overhead"),
    ("Barbell curl", "Biceps", "Standing curl with a straight barbell"),
    ("Push-up", "Chest", "Bodyweight push-up with a straight body line"),
];

/// Fills an empty exercise catalog with the default exercise types.
pub struct CatalogSeeder {
    exercise_types: Arc<dyn ExerciseTypeRepository>,
}

impl CatalogSeeder {
    pub fn new(exercise_types: Arc<dyn ExerciseTypeRepository>) -> Self {
        Self { exercise_types }
    }

    /// Returns how many exercise types were inserted. A non-empty catalog is left untouched.
    pub async fn seed_catalog(&self) -> Result<usize> {
        let existing = self.exercise_types.count_exercise_types().await?;
        if existing > 0 {
            tracing::info!(existing, "Exercise catalog already populated, skipping seeding");
            return Ok(0);
        }

        tracing::info!("Seeding default exercise catalog...");

        for (name, muscle_group, description) in DEFAULT_EXERCISE_TYPES {
            self.exercise_types
                .insert_exercise_type(ExerciseTypeRequest {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    muscle_group: Some(muscle_group.to_string()),
                })
                .await?;
        }

        tracing::info!(count = DEFAULT_EXERCISE_TYPES.len(), "Exercise catalog seeded");
        Ok(DEFAULT_EXERCISE_TYPES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    #[tokio::test]
    async fn test_seeds_only_an_empty_catalog() {
        let store = Arc::new(MemoryStore::new());
        let seeder = CatalogSeeder::new(store.clone());

        assert_eq!(seeder.seed_catalog().await.unwrap(), 7);
        assert_eq!(seeder.seed_catalog().await.unwrap(), 0);

        let catalog = store.list_exercise_types().await.unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog[0].name, "Bench press");
        assert_eq!(catalog[0].muscle_group.as_deref(), Some("Chest"));
    }
}
