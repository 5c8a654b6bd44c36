use axum::{
    extract::{Path, State},
    middleware,
    response::Json,
    routing::get,
    Router,
};

use super::{ApiError, AppState};
use crate::auth::{jwt_auth_middleware, MessageResponse, UserSession};
use crate::models::{Workout, WorkoutRequest};

pub fn workout_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:id", get(get_workout).put(update_workout).delete(delete_workout))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_service.clone(),
            jwt_auth_middleware,
        ))
        .with_state(state)
}

/// The caller's workouts, most recent first
#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn list_workouts(
    State(state): State<AppState>,
    session: UserSession,
) -> Result<Json<Vec<Workout>>, ApiError> {
    Ok(Json(state.workout_service.list(&session.user_id).await?))
}

#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn get_workout(
    State(state): State<AppState>,
    session: UserSession,
    Path(id): Path<i64>,
) -> Result<Json<Workout>, ApiError> {
    Ok(Json(state.workout_service.get(&session.user_id, id).await?))
}

#[tracing::instrument(skip(state, session, request), fields(user_id = %session.user_id))]
async fn create_workout(
    State(state): State<AppState>,
    session: UserSession,
    Json(request): Json<WorkoutRequest>,
) -> Result<Json<Workout>, ApiError> {
    Ok(Json(state.workout_service.create(&session.user_id, request).await?))
}

#[tracing::instrument(skip(state, session, request), fields(user_id = %session.user_id))]
async fn update_workout(
    State(state): State<AppState>,
    session: UserSession,
    Path(id): Path<i64>,
    Json(request): Json<WorkoutRequest>,
) -> Result<Json<Workout>, ApiError> {
    Ok(Json(state.workout_service.update(&session.user_id, id, request).await?))
}

#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn delete_workout(
    State(state): State<AppState>,
    session: UserSession,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.workout_service.delete(&session.user_id, id).await?;
    Ok(Json(MessageResponse::new("Workout deleted")))
}
