// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleTags, ArticleTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub description: Option<String>,
    pub tags: ArticleTags,
    /// Legacy classification, superseded by `tags`. Still read by the
    /// category listing and the migrate-categories tool.
    pub category: Option<String>,
    pub hero_image_url: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub author_id: UserId,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub description: Option<String>,
    pub tags: ArticleTags,
    pub hero_image_url: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub author_id: UserId,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    /// A freshly submitted article: published immediately, with `pub_date`
    /// and the audit timestamps all set to the creation instant.
    pub fn submitted(
        title: ArticleTitle,
        slug: ArticleSlug,
        content: ArticleContent,
        description: Option<String>,
        tags: ArticleTags,
        hero_image_url: Option<String>,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            slug,
            content,
            description,
            tags,
            hero_image_url,
            pub_date: now,
            author_id,
            is_published: true,
            created_at: now,
            updated_at: now,
        }
    }
}
