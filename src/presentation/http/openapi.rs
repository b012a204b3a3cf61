// src/presentation/http/openapi.rs
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use super::controllers::{archive, articles, auth, comments, health, likes};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::health_db,
        auth::register,
        auth::login,
        auth::me,
        articles::list_articles,
        articles::create_article,
        articles::get_article,
        articles::search_articles,
        articles::list_by_tag,
        articles::list_by_category,
        articles::list_tags,
        archive::archive_index,
        archive::archive_month,
        comments::list_comments,
        comments::add_comment,
        likes::like_status,
        likes::toggle_like,
    ),
    components(schemas(
        health::HealthStatus,
        auth::RegisterRequest,
        auth::LoginRequest,
        articles::CreateArticleRequest,
        comments::AddCommentRequest,
        crate::application::dto::UserDto,
        crate::application::dto::AuthorDto,
        crate::application::dto::AuthTokenDto,
        crate::application::dto::LoginResponseDto,
        crate::application::dto::ArticleDto,
        crate::application::dto::ArticleSummaryDto,
        crate::application::dto::ArticleListDto,
        crate::application::dto::PageMeta,
        crate::application::dto::SearchResultsDto,
        crate::application::dto::MonthBucketDto,
        crate::application::dto::ArchiveIndexDto,
        crate::application::dto::ArchiveMonthDto,
        crate::application::dto::TagSummaryDto,
        crate::application::dto::CommentDto,
        crate::application::dto::CommentListDto,
        crate::application::dto::LikeStatusDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "auth", description = "Registration and login"),
        (name = "articles", description = "Article creation and listings"),
        (name = "archive", description = "Monthly archive"),
        (name = "comments", description = "Comments on articles"),
        (name = "likes", description = "Likes on articles"),
    ),
    info(
        title = "uchinokiroku API",
        description = "Family blog backend with date-based article slugs"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .build(),
                ),
            );
        }
    }
}
