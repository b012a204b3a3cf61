// src/application/queries/articles/get_by_slug.rs
use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

impl ArticleQueryService {
    pub async fn get_article_by_slug(&self, slug: &str) -> ApplicationResult<ArticleDto> {
        self.read_repo
            .find_by_slug(slug, true)
            .await?
            .map(ArticleDto::from)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
