use crate::domain::article::{ArticleWithMeta, MonthCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pagination::PageMeta;
use super::serde_time;
use super::users::AuthorDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub hero_image_url: Option<String>,
    #[serde(with = "serde_time")]
    pub pub_date: DateTime<Utc>,
    pub is_published: bool,
    pub author: AuthorDto,
    pub comment_count: u64,
    pub like_count: u64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleWithMeta> for ArticleDto {
    fn from(meta: ArticleWithMeta) -> Self {
        let article = meta.article;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            content: article.content.into(),
            description: article.description,
            tags: article.tags.into(),
            category: article.category,
            hero_image_url: article.hero_image_url,
            pub_date: article.pub_date,
            is_published: article.is_published,
            author: AuthorDto {
                name: meta.author_name,
                email: meta.author_email,
            },
            comment_count: meta.comment_count,
            like_count: meta.like_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Trimmed-down article used by search results and archive listings, with
/// the content cut to a preview length.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub author: AuthorDto,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl ArticleSummaryDto {
    pub fn from_meta(meta: ArticleWithMeta, preview_chars: usize) -> Self {
        let article = meta.article;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            content: preview(article.content.as_str(), preview_chars),
            tags: article.tags.into(),
            category: article.category,
            author: AuthorDto {
                name: meta.author_name,
                email: meta.author_email,
            },
            created_at: article.created_at,
        }
    }
}

// Character-based, not byte-based: most content here is Japanese.
fn preview(content: &str, max_chars: usize) -> String {
    let mut out: String = content.chars().take(max_chars).collect();
    if content.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    pub pagination: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultsDto {
    pub articles: Vec<ArticleSummaryDto>,
    pub query: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucketDto {
    pub year_month: String,
    pub count: u64,
    pub year: i32,
    pub month: u32,
}

impl From<MonthCount> for MonthBucketDto {
    fn from(value: MonthCount) -> Self {
        Self {
            year_month: format!("{:04}-{:02}", value.year, value.month),
            count: value.count,
            year: value.year,
            month: value.month,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveIndexDto {
    pub archive: Vec<MonthBucketDto>,
    pub total_months: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveMonthDto {
    pub articles: Vec<ArticleSummaryDto>,
    pub year_month: String,
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagSummaryDto {
    pub tags: Vec<String>,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_is_character_safe() {
        let text = "あいうえおかきくけこ";
        assert_eq!(preview(text, 5), "あいうえお...");
        assert_eq!(preview(text, 10), "あいうえおかきくけこ");
        assert_eq!(preview(text, 20), "あいうえおかきくけこ");
    }
}
