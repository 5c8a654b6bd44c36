use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::exercise_types::exercise_type_routes;
use super::health::health_check;
use super::performed_sets::performed_set_routes;
use super::session::session_routes;
use super::statistics::statistics_routes;
use super::workouts::workout_routes;
use crate::auth::{cors_layer, security_headers_layer, JwtService};
use crate::repositories::Repositories;
use crate::services::{ExerciseTypeService, PerformedSetService, StatisticsService, WorkoutService};

#[derive(Clone)]
pub struct AppState {
    pub jwt_service: JwtService,
    pub exercise_type_service: ExerciseTypeService,
    pub workout_service: WorkoutService,
    pub performed_set_service: PerformedSetService,
    pub statistics_service: StatisticsService,
}

impl AppState {
    pub fn new(repositories: &Repositories, jwt_service: JwtService) -> Self {
        Self {
            jwt_service,
            exercise_type_service: ExerciseTypeService::new(repositories.exercise_types.clone()),
            workout_service: WorkoutService::new(repositories.workouts.clone()),
            performed_set_service: PerformedSetService::new(
                repositories.performed_sets.clone(),
                repositories.exercise_types.clone(),
            ),
            statistics_service: StatisticsService::from_repositories(repositories),
        }
    }
}

pub fn create_routes(repositories: Repositories, jwt_secret: &str) -> Router {
    create_router(AppState::new(&repositories, JwtService::new(jwt_secret)))
}

pub fn create_router(state: AppState) -> Router {
    // Create v1 API routes
    let api_v1 = Router::new()
        .nest("/exercise-types", exercise_type_routes(state.clone()))
        .nest("/workouts", workout_routes(state.clone()))
        .nest("/performed-exercises", performed_set_routes(state.clone()))
        .nest("/statistics", statistics_routes(state.clone()))
        .nest("/auth", session_routes(state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1.clone())
        // Unversioned paths used by the browser client
        .nest("/api", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(security_headers_layer())
        .layer(cors_layer())
}
