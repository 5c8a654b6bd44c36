use axum::{middleware, response::Json, routing::get, Router};

use super::AppState;
use crate::auth::{jwt_auth_middleware, SessionInfo, UserSession};

pub fn session_routes(state: AppState) -> Router {
    Router::new()
        .route("/session", get(current_session))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_service.clone(),
            jwt_auth_middleware,
        ))
        .with_state(state)
}

/// Who the bearer token belongs to, and whether the catalog admin UI applies
async fn current_session(session: UserSession) -> Json<SessionInfo> {
    Json(SessionInfo::from(session))
}
