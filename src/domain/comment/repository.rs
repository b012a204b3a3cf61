use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Comment joined with the author fields the API embeds.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_name: Option<String>,
    pub author_email: String,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// All comments on an article, oldest first.
    async fn list_for_article(&self, article_id: ArticleId)
    -> DomainResult<Vec<CommentWithAuthor>>;
}
