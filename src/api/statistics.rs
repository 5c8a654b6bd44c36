use axum::{
    extract::{Query, State},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::auth::{jwt_auth_middleware, UserSession};
use crate::models::{StatisticsEntry, StatisticsOverview};
use crate::services::StatisticsService;

#[derive(Debug, Default, Deserialize)]
pub struct StatisticsQuery {
    /// RFC 3339 end of the window; defaults to now
    pub as_of: Option<String>,
}

impl StatisticsQuery {
    pub fn resolve_as_of(&self) -> Result<DateTime<Utc>, ApiError> {
        match &self.as_of {
            None => Ok(Utc::now()),
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| ApiError::InvalidQuery(format!("as_of must be an RFC 3339 timestamp, got '{}'", raw))),
        }
    }
}

pub fn statistics_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_statistics))
        .route("/overview", get(get_statistics_overview))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_service.clone(),
            jwt_auth_middleware,
        ))
        .with_state(state)
}

/// Per-exercise totals for the trailing 28 days, as consumed by the browser client
#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn get_statistics(
    State(state): State<AppState>,
    session: UserSession,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<Vec<StatisticsEntry>>, ApiError> {
    let as_of = query.resolve_as_of()?;

    let stats = state
        .statistics_service
        .compute_statistics(&session.user_id, as_of)
        .await?;

    Ok(Json(stats.into_iter().map(StatisticsEntry::from).collect()))
}

/// Same figures shaped for the statistics page
#[tracing::instrument(skip(state, session), fields(user_id = %session.user_id))]
async fn get_statistics_overview(
    State(state): State<AppState>,
    session: UserSession,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<StatisticsOverview>, ApiError> {
    let as_of = query.resolve_as_of()?;

    let stats = state
        .statistics_service
        .compute_statistics(&session.user_id, as_of)
        .await?;

    Ok(Json(StatisticsOverview::new(
        StatisticsService::window_start(as_of),
        as_of,
        stats,
    )))
}
