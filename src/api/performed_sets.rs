use axum::{
    extract::{Path, Query, State},
    middleware,
    response::Json,
    routing::get,
    Router,
};

use super::{ApiError, AppState};
use crate::auth::{jwt_auth_middleware, MessageResponse, UserSession};
use crate::models::{CreatePerformedSet, PerformedSet, PerformedSetFilter};

pub fn performed_set_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_performed_sets).post(create_performed_set))
        .route("/:id", get(get_performed_set).delete(delete_performed_set))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_service.clone(),
            jwt_auth_middleware,
        ))
        .with_state(state)
}

#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn list_performed_sets(
    State(state): State<AppState>,
    session: UserSession,
    Query(filter): Query<PerformedSetFilter>,
) -> Result<Json<Vec<PerformedSet>>, ApiError> {
    let sets = state
        .performed_set_service
        .list(&session.user_id, filter.workout_id)
        .await?;
    Ok(Json(sets))
}

#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn get_performed_set(
    State(state): State<AppState>,
    session: UserSession,
    Path(id): Path<i64>,
) -> Result<Json<PerformedSet>, ApiError> {
    Ok(Json(state.performed_set_service.get(&session.user_id, id).await?))
}

#[tracing::instrument(skip(state, session, request), fields(user_id = %session.user_id))]
async fn create_performed_set(
    State(state): State<AppState>,
    session: UserSession,
    Json(request): Json<CreatePerformedSet>,
) -> Result<Json<PerformedSet>, ApiError> {
    Ok(Json(state.performed_set_service.create(&session.user_id, request).await?))
}

#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn delete_performed_set(
    State(state): State<AppState>,
    session: UserSession,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.performed_set_service.delete(&session.user_id, id).await?;
    Ok(Json(MessageResponse::new("Exercise deleted from workout")))
}
