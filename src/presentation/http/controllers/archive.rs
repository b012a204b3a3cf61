// src/presentation/http/controllers/archive.rs
use crate::{
    application::dto::{ArchiveIndexDto, ArchiveMonthDto},
    presentation::http::{
        error::{HttpResult, IntoHttpResult},
        extractors::Authenticated,
        state::HttpState,
    },
};
use axum::{Extension, Json, extract::Path};

/// Month buckets with article counts, newest month first.
#[utoipa::path(
    get,
    path = "/api/articles/archive",
    tag = "archive",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Archive index", body = ArchiveIndexDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn archive_index(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
) -> HttpResult<Json<ArchiveIndexDto>> {
    let index = state
        .services
        .article_queries
        .archive_index()
        .await
        .into_http()?;
    Ok(Json(index))
}

/// Articles published in one month, identified as YYYY-MM.
#[utoipa::path(
    get,
    path = "/api/articles/archive/{year_month}",
    tag = "archive",
    security(("bearer_token" = [])),
    params(("year_month" = String, Path, description = "Month in YYYY-MM form")),
    responses(
        (status = 200, description = "Articles for the month", body = ArchiveMonthDto),
        (status = 400, description = "Malformed month"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn archive_month(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(year_month): Path<String>,
) -> HttpResult<Json<ArchiveMonthDto>> {
    let month = state
        .services
        .article_queries
        .archive_month(&year_month)
        .await
        .into_http()?;
    Ok(Json(month))
}
