mod common;

use std::collections::HashMap;
use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use befit::models::{ExerciseStat, PerformedSet, UNKNOWN_EXERCISE_TYPE};
use befit::repositories::{MemoryStore, Repositories, WorkoutRepository};
use befit::services::statistics_service::aggregate_performed_sets;
use befit::services::{ExerciseTypeService, ServiceError, StatisticsService};

use common::{seed_exercise_type, seed_set, seed_workout};

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 29, 12, 0, 0).unwrap()
}

fn service_for(store: &Arc<MemoryStore>) -> StatisticsService {
    StatisticsService::from_repositories(&Repositories::from_store(store.clone()))
}

#[tokio::test]
async fn test_user_without_workouts_gets_empty_statistics() {
    let store = Arc::new(MemoryStore::new());
    seed_exercise_type(&store, "Bench press").await;

    let stats = service_for(&store).compute_statistics("alice", as_of()).await.unwrap();

    assert!(stats.is_empty());
}

#[tokio::test]
async fn test_sets_of_one_exercise_type_are_aggregated() {
    let store = Arc::new(MemoryStore::new());
    let bench = seed_exercise_type(&store, "Bench press").await;
    let workout = seed_workout(&store, "alice", as_of() - Duration::days(3)).await;
    seed_set(&store, "alice", workout, bench, 3, 10, 50.0).await;
    seed_set(&store, "alice", workout, bench, 4, 8, 60.0).await;

    let stats = service_for(&store).compute_statistics("alice", as_of()).await.unwrap();

    assert_eq!(
        stats,
        vec![ExerciseStat {
            exercise_type_id: bench,
            exercise_type_name: "Bench press".to_string(),
            times_performed: 2,
            total_repetitions: 62,
            average_weight: 55.0,
            max_weight: 60.0,
        }]
    );
}

#[tokio::test]
async fn test_groups_span_workouts_and_are_ordered_by_exercise_type() {
    let store = Arc::new(MemoryStore::new());
    let bench = seed_exercise_type(&store, "Bench press").await;
    let squat = seed_exercise_type(&store, "Squat").await;
    let monday = seed_workout(&store, "alice", as_of() - Duration::days(10)).await;
    let friday = seed_workout(&store, "alice", as_of() - Duration::days(6)).await;
    seed_set(&store, "alice", friday, squat, 5, 5, 100.0).await;
    seed_set(&store, "alice", monday, bench, 3, 10, 50.0).await;
    seed_set(&store, "alice", monday, squat, 5, 5, 90.0).await;

    let stats = service_for(&store).compute_statistics("alice", as_of()).await.unwrap();

    let names: Vec<&str> = stats.iter().map(|s| s.exercise_type_name.as_str()).collect();
    assert_eq!(names, vec!["Bench press", "Squat"]);
    assert_eq!(stats[1].times_performed, 2);
    assert_eq!(stats[1].total_repetitions, 50);
    assert_eq!(stats[1].average_weight, 95.0);
    assert_eq!(stats[1].max_weight, 100.0);
}

#[tokio::test]
async fn test_window_lower_bound_is_inclusive() {
    let store = Arc::new(MemoryStore::new());
    let squat = seed_exercise_type(&store, "Squat").await;
    let on_bound = seed_workout(&store, "alice", as_of() - Duration::days(28)).await;
    let just_outside =
        seed_workout(&store, "alice", as_of() - Duration::days(28) - Duration::seconds(1)).await;
    seed_set(&store, "alice", on_bound, squat, 1, 5, 100.0).await;
    seed_set(&store, "alice", just_outside, squat, 1, 5, 200.0).await;

    let stats = service_for(&store).compute_statistics("alice", as_of()).await.unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].times_performed, 1);
    assert_eq!(stats[0].total_repetitions, 5);
    assert_eq!(stats[0].average_weight, 100.0);
    assert_eq!(stats[0].max_weight, 100.0);
}

#[tokio::test]
async fn test_other_users_workouts_are_ignored() {
    let store = Arc::new(MemoryStore::new());
    let deadlift = seed_exercise_type(&store, "Deadlift").await;
    let mine = seed_workout(&store, "alice", as_of() - Duration::days(1)).await;
    let theirs = seed_workout(&store, "bob", as_of() - Duration::days(1)).await;
    seed_set(&store, "alice", mine, deadlift, 1, 5, 120.0).await;
    seed_set(&store, "bob", theirs, deadlift, 1, 5, 250.0).await;

    let service = service_for(&store);
    let alice = service.compute_statistics("alice", as_of()).await.unwrap();
    let bob = service.compute_statistics("bob", as_of()).await.unwrap();
    let carol = service.compute_statistics("carol", as_of()).await.unwrap();

    assert_eq!(alice[0].max_weight, 120.0);
    assert_eq!(bob[0].max_weight, 250.0);
    assert!(carol.is_empty());
}

#[tokio::test]
async fn test_deleted_exercise_type_falls_back_to_placeholder_name() {
    let store = Arc::new(MemoryStore::new());
    let pull_up = seed_exercise_type(&store, "Pull-up").await;
    let workout = seed_workout(&store, "alice", as_of() - Duration::days(2)).await;
    seed_set(&store, "alice", workout, pull_up, 2, 10, 20.0).await;

    ExerciseTypeService::new(store.clone()).delete(pull_up).await.unwrap();

    let stats = service_for(&store).compute_statistics("alice", as_of()).await.unwrap();

    assert_eq!(
        stats,
        vec![ExerciseStat {
            exercise_type_id: pull_up,
            exercise_type_name: UNKNOWN_EXERCISE_TYPE.to_string(),
            times_performed: 1,
            total_repetitions: 20,
            average_weight: 20.0,
            max_weight: 20.0,
        }]
    );
}

#[tokio::test]
async fn test_deleting_a_workout_removes_its_sets_from_statistics() {
    let store = Arc::new(MemoryStore::new());
    let curl = seed_exercise_type(&store, "Barbell curl").await;
    let kept = seed_workout(&store, "alice", as_of() - Duration::days(4)).await;
    let removed = seed_workout(&store, "alice", as_of() - Duration::days(2)).await;
    seed_set(&store, "alice", kept, curl, 3, 12, 30.0).await;
    seed_set(&store, "alice", removed, curl, 3, 12, 35.0).await;

    assert!(store.delete_workout("alice", removed).await.unwrap());

    let stats = service_for(&store).compute_statistics("alice", as_of()).await.unwrap();
    assert_eq!(stats[0].times_performed, 1);
    assert_eq!(stats[0].max_weight, 30.0);
}

#[tokio::test]
async fn test_blank_user_id_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let service = service_for(&store);

    assert_matches!(
        service.compute_statistics("", as_of()).await,
        Err(ServiceError::InvalidArgument(_))
    );
    assert_matches!(
        service.compute_statistics("   ", as_of()).await,
        Err(ServiceError::InvalidArgument(_))
    );
}

fn arb_set() -> impl Strategy<Value = (i64, i32, i32, f64)> {
    (1i64..=4, 1i32..=20, 1i32..=100, 0.1f64..500.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_statistics_are_stable_and_consistent(sets in prop::collection::vec(arb_set(), 1..30)) {
        let (first, second) = tokio_test::block_on(async {
            let store = Arc::new(MemoryStore::new());
            for name in ["Bench press", "Squat", "Deadlift", "Pull-up"] {
                seed_exercise_type(&store, name).await;
            }
            let workout = seed_workout(&store, "alice", as_of() - Duration::days(1)).await;
            for (exercise_type_id, sets, reps, weight) in &sets {
                seed_set(&store, "alice", workout, *exercise_type_id, *sets, *reps, *weight).await;
            }

            let service = service_for(&store);
            (
                service.compute_statistics("alice", as_of()).await.unwrap(),
                service.compute_statistics("alice", as_of()).await.unwrap(),
            )
        });

        prop_assert_eq!(&first, &second);

        let expected_reps: i64 = sets.iter().map(|(_, s, r, _)| i64::from(*s) * i64::from(*r)).sum();
        let total_reps: i64 = first.iter().map(|s| s.total_repetitions).sum();
        let total_count: i64 = first.iter().map(|s| s.times_performed).sum();
        prop_assert_eq!(total_reps, expected_reps);
        prop_assert_eq!(total_count, sets.len() as i64);

        for stat in &first {
            prop_assert!(stat.times_performed >= 1);
            prop_assert!(stat.average_weight <= stat.max_weight + 1e-9);
        }
    }
}

fn performed_set(id: i64, (exercise_type_id, sets, reps, weight): (i64, i32, i32, f64)) -> PerformedSet {
    PerformedSet {
        id,
        workout_id: 1,
        exercise_type_id,
        sets,
        reps,
        weight,
        created_at: as_of(),
    }
}

proptest! {
    #[test]
    fn prop_aggregation_ignores_set_order(raw in prop::collection::vec(arb_set(), 1..30)) {
        let names = HashMap::from([(1, "Bench press".to_string()), (2, "Squat".to_string())]);
        let sets: Vec<PerformedSet> = raw
            .into_iter()
            .enumerate()
            .map(|(i, values)| performed_set(i as i64 + 1, values))
            .collect();
        let mut reversed = sets.clone();
        reversed.reverse();

        let forward = aggregate_performed_sets(&sets, &names);
        let backward = aggregate_performed_sets(&reversed, &names);

        prop_assert_eq!(forward.len(), backward.len());
        for (a, b) in forward.iter().zip(&backward) {
            prop_assert_eq!(a.exercise_type_id, b.exercise_type_id);
            prop_assert_eq!(&a.exercise_type_name, &b.exercise_type_name);
            prop_assert_eq!(a.times_performed, b.times_performed);
            prop_assert_eq!(a.total_repetitions, b.total_repetitions);
            prop_assert_eq!(a.max_weight, b.max_weight);
            prop_assert!((a.average_weight - b.average_weight).abs() < 1e-9);
        }
    }
}
