use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

/// Roles carried in the token. Role assignment itself belongs to the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// JWT token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,      // Subject (opaque user id)
    pub email: String,    // User email
    pub role: UserRole,   // User role
    pub exp: usize,       // Expiration time
    pub iat: usize,       // Issued at
    pub jti: String,      // JWT ID
}

/// Authenticated caller, resolved once per request by `jwt_auth_middleware`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
    pub jti: String,
}

impl UserSession {
    pub fn from_claims(claims: &Claims) -> Result<Self, AuthError> {
        if claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(Self {
            user_id: claims.sub.clone(),
            email: claims.email.clone(),
            role: claims.role.clone(),
            jti: claims.jti.clone(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserSession
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserSession>()
            .cloned()
            .ok_or(AuthError::MissingAuthHeader)
    }
}

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
    pub is_admin: bool,
}

impl From<UserSession> for SessionInfo {
    fn from(session: UserSession) -> Self {
        Self {
            is_admin: session.role.is_admin(),
            user_id: session.user_id,
            email: session.email,
            role: session.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
