//! The posts resource: one path, dispatched on HTTP method.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use posts_core::domain::{NewPost, Post, PostPatch};
use posts_shared::dto::{CreatePostRequest, DeletePostRequest, UpdatePostRequest};
use posts_shared::{LatestPostResponse, MessageResponse, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Route JSON body rejections through `AppError` so they render as `{error}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// GET /api/trpc/posts
pub async fn latest_post(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let latest = state
        .posts
        .latest()
        .await
        .map_err(|e| AppError::persistence("Error fetching latest post", e))?;

    let body = LatestPostResponse::from(latest.map(to_response));
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/trpc/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::new(req.name.unwrap_or_default())?;

    let post = state
        .posts
        .create(new_post)
        .await
        .map_err(|e| AppError::persistence("Error creating post", e))?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /api/trpc/posts
pub async fn update_post(
    state: web::Data<AppState>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let id = parse_id(req.id)?;
    let patch = PostPatch::new(req.name)?;

    // Unknown ids surface as 500 like any other storage failure.
    let post = state
        .posts
        .update(id, patch)
        .await
        .map_err(|e| AppError::persistence("Error updating post", e))?;

    tracing::info!(post_id = %post.id, "Post updated");
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/trpc/posts
pub async fn delete_post(
    state: web::Data<AppState>,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(body.into_inner().id)?;

    state
        .posts
        .delete(id)
        .await
        .map_err(|e| AppError::persistence("Error deleting post", e))?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::deleted()))
}

/// Any other method on /api/trpc/posts
pub async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed(req.method().clone()))
}

fn parse_id(id: Option<String>) -> AppResult<Uuid> {
    let id = id
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Post id is required".to_string()))?;

    Uuid::parse_str(id.trim()).map_err(|_| AppError::BadRequest("Invalid post id".to_string()))
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        name: post.name,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}
