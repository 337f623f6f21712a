//! Blog post repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Blog post record from database
///
/// `author_id` is set once on insert and never updated; the update query
/// below deliberately leaves it out.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post repository for database operations
pub struct PostRepository;

impl PostRepository {
    /// List all posts, newest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<PostRecord>> {
        let posts = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Find a post by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PostRecord>> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Create a new post
    pub async fn create(
        pool: &PgPool,
        title: &str,
        content: &str,
        author_id: Uuid,
    ) -> Result<PostRecord> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Update a post's title and content
    ///
    /// Returns None if the post no longer exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<PostRecord>> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            UPDATE posts
            SET title = $2, content = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Delete a post
    ///
    /// Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see tests/posts_integration_test.rs
}
