use axum::{
    extract::{Path, State},
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};

use super::{ApiError, AppState};
use crate::auth::{admin_only_middleware, jwt_auth_middleware, MessageResponse, UserSession};
use crate::models::{ExerciseType, ExerciseTypeRequest};

/// Reads are public; changes require an admin token.
pub fn exercise_type_routes(state: AppState) -> Router {
    let admin = Router::new()
        .route("/", post(create_exercise_type))
        .route("/:id", axum::routing::put(update_exercise_type).delete(delete_exercise_type))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_service.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/", get(list_exercise_types))
        .route("/:id", get(get_exercise_type))
        .merge(admin)
        .with_state(state)
}

#[tracing::instrument(skip(state))]
async fn list_exercise_types(State(state): State<AppState>) -> Result<Json<Vec<ExerciseType>>, ApiError> {
    Ok(Json(state.exercise_type_service.list().await?))
}

#[tracing::instrument(skip(state))]
async fn get_exercise_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExerciseType>, ApiError> {
    Ok(Json(state.exercise_type_service.get(id).await?))
}

#[tracing::instrument(skip(state, session, request), fields(admin = %session.user_id))]
async fn create_exercise_type(
    State(state): State<AppState>,
    session: UserSession,
    Json(request): Json<ExerciseTypeRequest>,
) -> Result<Json<ExerciseType>, ApiError> {
    Ok(Json(state.exercise_type_service.create(request).await?))
}

#[tracing::instrument(skip(state, session, request), fields(admin = %session.user_id))]
async fn update_exercise_type(
    State(state): State<AppState>,
    session: UserSession,
    Path(id): Path<i64>,
    Json(request): Json<ExerciseTypeRequest>,
) -> Result<Json<ExerciseType>, ApiError> {
    Ok(Json(state.exercise_type_service.update(id, request).await?))
}

#[tracing::instrument(skip(state, session), fields(admin = %session.user_id))]
async fn delete_exercise_type(
    State(state): State<AppState>,
    session: UserSession,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.exercise_type_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Exercise type deleted")))
}
