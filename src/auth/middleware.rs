use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};

use crate::auth::{extract_bearer_token, AuthError, JwtService, UserSession};

/// JWT authentication middleware
pub async fn jwt_auth_middleware(
    State(jwt_service): State<JwtService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;

    let token = extract_bearer_token(auth_header)?;
    let session = jwt_service.validate_session(token)?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Admin-only middleware. Must run after `jwt_auth_middleware`.
pub async fn admin_only_middleware(
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let session = request
        .extensions()
        .get::<UserSession>()
        .ok_or(AuthError::MissingAuthHeader)?;

    if !session.role.is_admin() {
        tracing::warn!(user_id = %session.user_id, "Non-admin attempted a catalog change");
        return Err(AuthError::InsufficientPermissions);
    }

    Ok(next.run(request).await)
}

/// CORS configuration for the browser client
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Security headers middleware
pub fn security_headers_layer() -> tower_http::set_header::SetResponseHeaderLayer<axum::http::HeaderValue> {
    tower_http::set_header::SetResponseHeaderLayer::overriding(
        axum::http::header::HeaderName::from_static("x-content-type-options"),
        axum::http::HeaderValue::from_static("nosniff"),
    )
}
