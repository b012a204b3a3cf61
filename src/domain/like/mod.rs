// src/domain/like/mod.rs
//
// A like is pure association state: (article, user), at most once. There is
// no entity to speak of beyond the pair itself, so the repository works
// directly on ids.
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn exists(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool>;
    async fn insert(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()>;
    /// Returns whether a like was actually removed.
    async fn delete(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool>;
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64>;
}
