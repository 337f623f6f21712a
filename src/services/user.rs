//! User service for registration and login
//!
//! Password hashing and verification run on the blocking thread pool so a
//! slow hash never stalls the async runtime; the JWT service is passed by
//! reference and uses pre-computed keys.

use crate::auth::{JwtService, PasswordService, Role};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use serde::Serialize;
use sqlx::PgPool;

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<&UserRecord> for UserSummary {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.parse().unwrap_or(Role::User),
        }
    }
}

/// Successful login: a signed bearer token plus the user it identifies
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// New users always get the `user` role; role escalation is not a
    /// registration concern. The username pre-check gives a friendly
    /// conflict early, but the UNIQUE constraint on the column is the
    /// authoritative guard against concurrent registrations.
    pub async fn register(
        pool: &PgPool,
        username: &str,
        password: &str,
    ) -> Result<UserSummary, ApiError> {
        if username.trim().is_empty() {
            return Err(ApiError::Validation("Username must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(ApiError::Validation("Password must not be empty".to_string()));
        }

        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Username already exists".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(password.to_string()).await?;

        let user = UserRepository::create(pool, username, &password_hash, "user")
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .is_some_and(|d| matches!(d.kind(), sqlx::error::ErrorKind::UniqueViolation))
                {
                    ApiError::Conflict("Username already exists".to_string())
                } else {
                    ApiError::Database(e)
                }
            })?;

        Ok(UserSummary::from(&user))
    }

    /// Login with username and password
    ///
    /// Unknown username and wrong password produce the same response so
    /// the endpoint does not leak which usernames exist.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone()).await?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        let role = user.role.parse().unwrap_or(Role::User);
        let token = jwt_service
            .issue_token(user.id, role)
            .map_err(ApiError::Internal)?;

        Ok(LoginResponse {
            token,
            user: UserSummary::from(&user),
        })
    }
}
