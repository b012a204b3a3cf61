// src/presentation/http/controllers/articles.rs
use crate::{
    application::{
        commands::articles::CreateArticleCommand,
        dto::{ArticleDto, ArticleListDto, SearchResultsDto, TagSummaryDto},
        queries::articles::ListArticlesQuery,
    },
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub hero_image_url: Option<String>,
}

/// Published articles, newest first, paginated.
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "articles",
    params(ListParams),
    responses(
        (status = 200, description = "Page of articles", body = ArticleListDto),
    )
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.page,
            limit: params.limit,
            tag: params.tag,
        })
        .await
        .into_http()?;
    Ok(Json(page))
}

/// Submit a new article. The slug is allocated from the creation date and
/// never chosen by the caller.
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = "articles",
    security(("bearer_token" = [])),
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created", body = ArticleDto),
        (status = 400, description = "Blank title or content"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Slug contention exhausted retries"),
    )
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .create_article(
            &actor,
            CreateArticleCommand {
                title: payload.title,
                content: payload.content,
                description: payload.description,
                tags: payload.tags,
                hero_image_url: payload.hero_image_url,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// Fetch a single published article by slug.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    tag = "articles",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article", body = ArticleDto),
        (status = 404, description = "No published article with that slug"),
    )
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(&slug)
        .await
        .into_http()?;
    Ok(Json(article))
}

/// Full-text search over titles, content and tags.
#[utoipa::path(
    get,
    path = "/api/articles/search",
    tag = "articles",
    security(("bearer_token" = [])),
    params(SearchParams),
    responses(
        (status = 200, description = "Matching articles", body = SearchResultsDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    let results = state
        .services
        .article_queries
        .search_articles(params.q.as_deref().unwrap_or_default())
        .await
        .into_http()?;
    Ok(Json(results))
}

/// Published articles carrying the given tag.
#[utoipa::path(
    get,
    path = "/api/articles/tag/{tag}",
    tag = "articles",
    params(("tag" = String, Path, description = "Tag to filter by")),
    responses(
        (status = 200, description = "Articles with the tag", body = [ArticleDto]),
    )
)]
pub async fn list_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let articles = state
        .services
        .article_queries
        .list_by_tag(&tag)
        .await
        .into_http()?;
    Ok(Json(articles))
}

/// Published articles in the given legacy category.
#[utoipa::path(
    get,
    path = "/api/articles/category/{category}",
    tag = "articles",
    params(("category" = String, Path, description = "Category to filter by")),
    responses(
        (status = 200, description = "Articles in the category", body = [ArticleDto]),
    )
)]
pub async fn list_by_category(
    Extension(state): Extension<HttpState>,
    Path(category): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let articles = state
        .services
        .article_queries
        .list_by_category(&category)
        .await
        .into_http()?;
    Ok(Json(articles))
}

/// Most used tags across published articles.
#[utoipa::path(
    get,
    path = "/api/articles/tags",
    tag = "articles",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Top tags", body = TagSummaryDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
) -> HttpResult<Json<TagSummaryDto>> {
    let summary = state
        .services
        .article_queries
        .tag_summary()
        .await
        .into_http()?;
    Ok(Json(summary))
}
