use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleTags};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Read model for listing endpoints: the article plus the author fields and
/// interaction counts the API embeds in every response.
#[derive(Debug, Clone)]
pub struct ArticleWithMeta {
    pub article: Article,
    pub author_name: Option<String>,
    pub author_email: String,
    pub comment_count: u64,
    pub like_count: u64,
}

/// One row of the per-month posting counts used by the archive index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCount {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

/// Legacy category row consumed by the migrate-categories tool.
#[derive(Debug, Clone)]
pub struct CategorizedArticle {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
    pub tags: ArticleTags,
}

/// The two lookups slug allocation needs. Kept separate from the full read
/// repository so the allocator can be exercised against a trivial stub.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Number of articles whose `created_at` falls within the half-open UTC
    /// interval `[day 00:00, day 00:00 + 24h)`.
    async fn count_created_on(&self, day: NaiveDate) -> DomainResult<u64>;
    async fn slug_exists(&self, candidate: &str) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Replace the tag list of an existing article (category migration).
    async fn set_tags(&self, id: ArticleId, tags: &ArticleTags) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> DomainResult<Option<ArticleWithMeta>>;

    /// Published articles, newest `pub_date` first, optionally restricted to
    /// a tag. Returns the requested page plus the total matching count.
    async fn list_published(
        &self,
        page: u32,
        limit: u32,
        tag: Option<&str>,
    ) -> DomainResult<(Vec<ArticleWithMeta>, u64)>;

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<ArticleWithMeta>>;

    async fn list_by_category(&self, category: &str) -> DomainResult<Vec<ArticleWithMeta>>;

    /// Case-insensitive substring match over title and content, or exact tag
    /// match. Newest first, capped at `limit`.
    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<ArticleWithMeta>>;

    /// Per-month posting counts over all articles, newest month first.
    async fn month_counts(&self) -> DomainResult<Vec<MonthCount>>;

    /// Articles created in `[start, end)`, newest first.
    async fn list_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<ArticleWithMeta>>;

    /// Distinct tags with usage counts, most used first.
    async fn tag_counts(&self) -> DomainResult<Vec<(String, u64)>>;

    /// Articles still carrying a non-blank legacy category.
    async fn list_categorized(&self) -> DomainResult<Vec<CategorizedArticle>>;
}
