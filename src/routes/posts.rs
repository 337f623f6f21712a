//! Blog post routes
//!
//! Reads are public; mutations require a bearer token via the `AuthUser`
//! extractor. The author of a created post is always the caller - any
//! author field in the request body is ignored.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::PostRecord;
use crate::services::{PostInput, PostService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
}

/// Create/update request body
///
/// Unknown fields (including any client-supplied author id) are dropped
/// during deserialization.
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

impl From<PostRequest> for PostInput {
    fn from(req: PostRequest) -> Self {
        PostInput {
            title: req.title,
            content: req.content,
        }
    }
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /posts - list all posts
async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<PostRecord>>> {
    let posts = PostService::list(state.db()).await?;
    Ok(Json(posts))
}

/// GET /posts/:id - fetch a single post
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PostRecord>> {
    let post = PostService::get(state.db(), id).await?;
    Ok(Json(post))
}

/// POST /posts - create a post authored by the caller
async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PostRequest>,
) -> ApiResult<(StatusCode, Json<PostRecord>)> {
    let post = PostService::create(state.db(), &auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /posts/:id - replace title and content
///
/// 404 if the post is missing, 403 if the caller is neither the author
/// nor an admin.
async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<PostRequest>,
) -> ApiResult<Json<PostRecord>> {
    let post = PostService::update(state.db(), &auth, id, req.into()).await?;
    Ok(Json(post))
}

/// DELETE /posts/:id - delete a post
async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    PostService::delete(state.db(), &auth, id).await?;
    Ok(Json(DeleteResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
