// src/application/commands/likes.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, LikeStatusDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleReadRepository, like::LikeRepository},
};

pub struct LikeCommandService {
    like_repo: Arc<dyn LikeRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl LikeCommandService {
    pub fn new(
        like_repo: Arc<dyn LikeRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            like_repo,
            article_repo,
        }
    }

    /// Flip the caller's like on an article and report the new state.
    pub async fn toggle_like(
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

        let is_liked = if self.like_repo.exists(article_id, actor.id).await? {
            self.like_repo.delete(article_id, actor.id).await?;
            false
        } else {
            self.like_repo.insert(article_id, actor.id).await?;
            true
        };

        let like_count = self.like_repo.count_for_article(article_id).await?;

        Ok(LikeStatusDto {
            like_count,
            is_liked,
        })
    }
}
