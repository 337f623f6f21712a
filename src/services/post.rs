//! Blog post service
//!
//! Owns the mutation state machine: token verification happens in the
//! extractor, then `lookup -> {NotFound | ownership -> {Forbidden | go}}`.
//! The existence check always runs before the ownership check, so a
//! non-owner sees the same 404 for a missing post as anyone else.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{PostRecord, PostRepository};
use sqlx::PgPool;
use uuid::Uuid;

/// Input for creating or replacing a post
///
/// Deliberately has no author field; the author is always the
/// authenticated caller.
#[derive(Debug, Clone)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl PostInput {
    /// Title and content must both be non-empty
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::Validation("Title must not be empty".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(ApiError::Validation("Content must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Post service coordinating authorization and repository access
pub struct PostService;

impl PostService {
    /// List all posts, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<PostRecord>, ApiError> {
        PostRepository::find_all(pool).await.map_err(ApiError::Internal)
    }

    /// Get a single post
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<PostRecord, ApiError> {
        PostRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
    }

    /// Create a post authored by the caller
    pub async fn create(
        pool: &PgPool,
        auth: &AuthUser,
        input: PostInput,
    ) -> Result<PostRecord, ApiError> {
        input.validate()?;

        PostRepository::create(pool, &input.title, &input.content, auth.user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Replace a post's title and content
    ///
    /// 404 if missing, 403 if the caller is neither author nor admin.
    /// The author id is never touched.
    pub async fn update(
        pool: &PgPool,
        auth: &AuthUser,
        id: Uuid,
        input: PostInput,
    ) -> Result<PostRecord, ApiError> {
        let post = Self::get(pool, id).await?;

        if !auth.can_modify(post.author_id) {
            return Err(ApiError::Forbidden(
                "You don't have permission to edit this post".to_string(),
            ));
        }

        input.validate()?;

        PostRepository::update(pool, id, &input.title, &input.content)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
    }

    /// Delete a post
    ///
    /// Same lookup-then-ownership ordering as update.
    pub async fn delete(pool: &PgPool, auth: &AuthUser, id: Uuid) -> Result<(), ApiError> {
        let post = Self::get(pool, id).await?;

        if !auth.can_modify(post.author_id) {
            return Err(ApiError::Forbidden(
                "You don't have permission to delete this post".to_string(),
            ));
        }

        let deleted = PostRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;
        if !deleted {
            return Err(ApiError::NotFound("Post not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> PostInput {
        PostInput {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input("Cowboy Bebop", "See you later space cowboy").validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = input("", "content").validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_empty_content_rejected() {
        let err = input("title", "   ").validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
