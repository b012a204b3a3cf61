// src/presentation/http/routes.rs
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{
    controllers::{archive, articles, auth, comments, health, likes},
    openapi::ApiDoc,
    state::HttpState,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/search", get(articles::search_articles))
        .route("/articles/archive", get(archive::archive_index))
        .route("/articles/archive/{year_month}", get(archive::archive_month))
        .route("/articles/tags", get(articles::list_tags))
        .route("/articles/tag/{tag}", get(articles::list_by_tag))
        .route(
            "/articles/category/{category}",
            get(articles::list_by_category),
        )
        .route("/articles/{slug}", get(articles::get_article))
        .route(
            "/articles/{slug}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/articles/{slug}/like",
            get(likes::like_status).post(likes::toggle_like),
        );

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health))
        .route("/health/db", get(health::health_db))
        .nest("/api", api)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
