use crate::domain::comment::{Comment, CommentWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;
use super::users::AuthorDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub content: String,
    pub user: AuthorDto,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    /// Used right after posting, when the author fields come from the
    /// authenticated caller instead of a join.
    pub fn from_comment(comment: Comment, author_name: Option<String>, author_email: String) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            content: comment.content.into(),
            user: AuthorDto {
                name: author_name,
                email: author_email,
            },
            created_at: comment.created_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentDto {
    fn from(value: CommentWithAuthor) -> Self {
        Self::from_comment(value.comment, value.author_name, value.author_email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentListDto {
    pub comments: Vec<CommentDto>,
    pub count: usize,
}
