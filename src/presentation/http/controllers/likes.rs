// src/presentation/http/controllers/likes.rs
use crate::{
    application::dto::LikeStatusDto,
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path};

/// Like count and whether the caller has liked the article.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}/like",
    tag = "likes",
    security(("bearer_token" = [])),
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Like status", body = LikeStatusDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Article not found"),
    )
)]
pub async fn like_status(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<LikeStatusDto>> {
    let status = state
        .services
        .like_queries
        .like_status(&actor, &slug)
        .await
        .into_http()?;
    Ok(Json(status))
}

/// Toggle the caller's like on an article.
#[utoipa::path(
    post,
    path = "/api/articles/{slug}/like",
    tag = "likes",
    security(("bearer_token" = [])),
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "New like status", body = LikeStatusDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Article not found"),
    )
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<LikeStatusDto>> {
    let status = state
        .services
        .like_commands
        .toggle_like(&actor, &slug)
        .await
        .into_http()?;
    Ok(Json(status))
}
