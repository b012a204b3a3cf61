// src/infrastructure/repositories/postgres_like.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::like::LikeRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn exists(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE article_id = $1 AND user_id = $2)",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO likes (article_id, user_id, created_at) VALUES ($1, $2, now())",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE article_id = $1 AND user_id = $2")
            .bind(i64::from(article_id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count.max(0) as u64)
    }
}
