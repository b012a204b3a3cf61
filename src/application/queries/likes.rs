// src/application/queries/likes.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, LikeStatusDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleReadRepository, like::LikeRepository},
};

pub struct LikeQueryService {
    like_repo: Arc<dyn LikeRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl LikeQueryService {
    pub fn new(
        like_repo: Arc<dyn LikeRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            like_repo,
            article_repo,
        }
    }

    pub async fn like_status(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<LikeStatusDto> {
        let article = self
            .article_repo
            .find_by_slug(slug, false)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let article_id = article.article.id;

        let like_count = self.like_repo.count_for_article(article_id).await?;
        let is_liked = self.like_repo.exists(article_id, actor.id).await?;

        Ok(LikeStatusDto {
            like_count,
            is_liked,
        })
    }
}
