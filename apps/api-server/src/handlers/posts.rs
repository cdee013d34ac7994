//! Post resource handlers.
//!
//! Each handler validates its input, performs exactly one store call and
//! renders the result. Identifiers are parsed by the path extractor, ahead
//! of the body and before the store is touched.

use actix_web::{HttpResponse, web};

use blog_core::domain::{self, NewPost, PostId};
use blog_core::ports::{PostFilter, PostUpdate};
use blog_shared::MessageResponse;
use blog_shared::dto::PostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find(PostFilter::All).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_one(PostFilter::ById(id))
        .await?
        .ok_or_else(AppError::post_not_found)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .insert(NewPost::new(req.title, req.content))
        .await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
///
/// Responds with the stored document as it is after the update.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let update = PostUpdate::at(domain::now())
        .title(req.title)
        .content(req.content);

    let post = state
        .posts
        .update_one(PostFilter::ById(id), update)
        .await?
        .ok_or_else(AppError::post_not_found)?;
    tracing::info!(post_id = %post.id, "Post updated");

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = state.posts.delete_one(PostFilter::ById(id)).await?;
    if deleted == 0 {
        return Err(AppError::post_not_found());
    }
    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}
