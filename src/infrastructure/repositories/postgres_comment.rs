// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentRepository, CommentWithAuthor, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    user_id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            user_id: UserId::new(row.user_id)?,
            content: CommentContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentAuthorRow {
    id: i64,
    article_id: i64,
    user_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    author_name: Option<String>,
    author_email: String,
}

impl TryFrom<CommentAuthorRow> for CommentWithAuthor {
    type Error = DomainError;

    fn try_from(row: CommentAuthorRow) -> Result<Self, Self::Error> {
        Ok(CommentWithAuthor {
            comment: Comment {
                id: CommentId::new(row.id)?,
                article_id: ArticleId::new(row.article_id)?,
                user_id: UserId::new(row.user_id)?,
                content: CommentContent::new(row.content)?,
                created_at: row.created_at,
            },
            author_name: row.author_name,
            author_email: row.author_email,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, user_id, content, created_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, article_id, user_id, content, created_at",
        )
        .bind(i64::from(comment.article_id))
        .bind(i64::from(comment.user_id))
        .bind(comment.content.as_str())
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentAuthorRow>(
            "SELECT c.id, c.article_id, c.user_id, c.content, c.created_at, \
                    u.name AS author_name, u.email AS author_email \
             FROM comments c JOIN users u ON u.id = c.user_id \
             WHERE c.article_id = $1 ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(CommentWithAuthor::try_from)
            .collect()
    }
}
