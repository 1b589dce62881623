use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use scribe_application::BlogUseCase;
use scribe_core::{Blog, BlogId, CommentId, NewBlog, NewComment, UserId};

use crate::http::{
    context::{AdminUser, CurrentUser},
    dto::{BlogQuery, BlogRequest, CommentRequest, MessageResponse},
    error::ApiError,
    extract::{ValidJson, ValidQuery},
    state::{AppState, Ports},
};

fn blogs<P: Ports>(state: &AppState<P>) -> BlogUseCase<'_, P::Blogs, P::Comments> {
    BlogUseCase::new(state.blogs(), state.comments())
}

#[tracing::instrument(name = "List blogs", skip(state))]
pub async fn list_blogs<P: Ports>(
    State(state): State<AppState<P>>,
    ValidQuery(query): ValidQuery<BlogQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = blogs(&state);
    let range = query.date_range();

    let found = match (query.writer_id, query.status) {
        (Some(writer_id), _) if !writer_id.is_empty() => {
            use_case.get_by_writer_id(UserId::new(writer_id)).await?
        }
        (_, Some(status)) if !status.is_empty() => use_case.get_by_status(&status).await?,
        _ if !range.is_open() => use_case.get_by_modification_date_range(range).await?,
        _ => use_case.list().await?,
    };

    Ok(Json(found))
}

#[tracing::instrument(name = "Get blog", skip(state))]
pub async fn get_blog<P: Ports>(
    State(state): State<AppState<P>>,
    Path(blog_id): Path<BlogId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(blogs(&state).get_by_id(&blog_id).await?))
}

#[tracing::instrument(name = "Create blog", skip_all)]
pub async fn create_blog<P: Ports>(
    State(state): State<AppState<P>>,
    writer: CurrentUser,
    ValidJson(request): ValidJson<BlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let blog = blogs(&state)
        .create(NewBlog {
            title: request.title,
            body: request.body,
            writer_id: writer.user_id().clone(),
            status: request.status,
            last_modified_date: Utc::now(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(blog)))
}

#[tracing::instrument(name = "Update blog", skip(state, _writer, request))]
pub async fn update_blog<P: Ports>(
    State(state): State<AppState<P>>,
    _writer: CurrentUser,
    Path(blog_id): Path<BlogId>,
    ValidJson(request): ValidJson<BlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let blog = blogs(&state)
        .update(Blog {
            id: blog_id,
            title: request.title,
            body: request.body,
            status: request.status,
            last_modified_date: Utc::now(),
            ..Blog::default()
        })
        .await?;

    Ok(Json(blog))
}

#[tracing::instrument(name = "Delete blog", skip(state, _admin))]
pub async fn delete_blog<P: Ports>(
    State(state): State<AppState<P>>,
    _admin: AdminUser,
    Path(blog_id): Path<BlogId>,
) -> Result<impl IntoResponse, ApiError> {
    blogs(&state).delete(&blog_id).await?;

    Ok(Json(MessageResponse::new("Blog deleted successfully")))
}

#[tracing::instrument(name = "List comments", skip(state))]
pub async fn list_comments<P: Ports>(
    State(state): State<AppState<P>>,
    Path(blog_id): Path<BlogId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(blogs(&state).get_comments(blog_id).await?))
}

#[tracing::instrument(name = "Create comment", skip(state, writer, request))]
pub async fn create_comment<P: Ports>(
    State(state): State<AppState<P>>,
    writer: CurrentUser,
    Path(blog_id): Path<BlogId>,
    ValidJson(request): ValidJson<CommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = blogs(&state)
        .create_comment(NewComment {
            body: request.body,
            writer_id: writer.user_id().clone(),
            blog_id,
            commented_date: Utc::now(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[tracing::instrument(name = "Get comment", skip(state))]
pub async fn get_comment<P: Ports>(
    State(state): State<AppState<P>>,
    Path((blog_id, comment_id)): Path<(BlogId, CommentId)>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(blogs(&state).get_comment(&blog_id, &comment_id).await?))
}
