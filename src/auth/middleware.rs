//! Authentication middleware
//!
//! Provides the Axum extractor that fronts every mutating post endpoint:
//! it validates the bearer token and hands the verified identity to the
//! handler. Ownership itself is checked per-handler, after the post lookup.

use crate::auth::jwt::Role;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated identity extracted from a verified JWT
///
/// Handlers receive this by value; there is no ambient/thread-local state.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthUser {
    /// Ownership-or-admin rule for mutating a post
    ///
    /// Callers must check post existence first; a missing post is 404,
    /// never 403.
    #[inline]
    pub fn can_modify(&self, author_id: Uuid) -> bool {
        self.user_id == author_id || self.role.is_admin()
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        // Verify against the pre-computed keys in state
        let claims = app_state
            .jwt()
            .verify_token(token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

        // Parse user ID from claims
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        Ok(AuthUser {
            user_id,
            role: claims.role,
        })
    }
}
