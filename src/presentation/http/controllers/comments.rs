// src/presentation/http/controllers/comments.rs
use crate::{
    application::{
        commands::comments::AddCommentCommand,
        dto::{CommentDto, CommentListDto},
    },
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub content: String,
}

/// Comments on an article, oldest first.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments",
    tag = "comments",
    security(("bearer_token" = [])),
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Comments with count", body = CommentListDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Article not found"),
    )
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentListDto>> {
    let comments = state
        .services
        .comment_queries
        .list_comments(&slug)
        .await
        .into_http()?;
    Ok(Json(comments))
}

/// Leave a comment on an article.
#[utoipa::path(
    post,
    path = "/api/articles/{slug}/comments",
    tag = "comments",
    security(("bearer_token" = [])),
    params(("slug" = String, Path, description = "Article slug")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Blank content"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Article not found"),
    )
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .add_comment(
            &actor,
            AddCommentCommand {
                slug,
                content: payload.content,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}
