// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::ArticleReadRepository,
        comment::{CommentContent, CommentRepository, NewComment},
    },
};

pub struct AddCommentCommand {
    pub slug: String,
    pub content: String,
}

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            clock,
        }
    }

    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content = CommentContent::new(command.content)?;

        let article = self
            .article_repo
            .find_by_slug(&command.slug, false)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id: article.article.id,
                user_id: actor.id,
                content,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(CommentDto::from_comment(
            comment,
            actor.name.clone(),
            actor.email.clone(),
        ))
    }
}
