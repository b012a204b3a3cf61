// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CommentDto, CommentListDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
        }
    }

    /// All comments on an article, oldest first.
    pub async fn list_comments(&self, slug: &str) -> ApplicationResult<CommentListDto> {
        let article = self
            .article_repo
            .find_by_slug(slug, false)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments: Vec<CommentDto> = self
            .comment_repo
            .list_for_article(article.article.id)
            .await?
            .into_iter()
            .map(CommentDto::from)
            .collect();
        let count = comments.len();

        Ok(CommentListDto { comments, count })
    }
}
