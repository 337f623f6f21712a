//! Authentication routes
//!
//! Provides endpoints for user registration and login. Both endpoints are
//! public; the password work they trigger runs on the blocking thread pool.

use crate::error::ApiResult;
use crate::services::{LoginResponse, UserService, UserSummary};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Registration request body
///
/// There is intentionally no role field; every registration creates an
/// unprivileged user.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Register a new user
///
/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserSummary>)> {
    let user = UserService::register(state.db(), &req.username, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with username and password
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response =
        UserService::login(state.db(), state.jwt(), &req.username, &req.password).await?;
    Ok(Json(response))
}
