// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTags,
    ArticleTitle, ArticleWithMeta, ArticleWriteRepository, CategorizedArticle, MonthCount,
    NewArticle, SlugLookup,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, slug, content, description, tags, category, \
     hero_image_url, pub_date, author_id, is_published, created_at, updated_at";

// Article columns plus the joined author fields and interaction counts the
// listing endpoints embed.
const META_SELECT: &str = "SELECT a.id, a.title, a.slug, a.content, a.description, a.tags, \
     a.category, a.hero_image_url, a.pub_date, a.author_id, a.is_published, \
     a.created_at, a.updated_at, u.name AS author_name, u.email AS author_email, \
     (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.id) AS comment_count, \
     (SELECT COUNT(*) FROM likes l WHERE l.article_id = a.id) AS like_count \
     FROM articles a JOIN users u ON u.id = a.author_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    description: Option<String>,
    tags: Vec<String>,
    category: Option<String>,
    hero_image_url: Option<String>,
    pub_date: DateTime<Utc>,
    author_id: i64,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
            description: row.description,
            tags: ArticleTags::new(row.tags),
            category: row.category,
            hero_image_url: row.hero_image_url,
            pub_date: row.pub_date,
            author_id: UserId::new(row.author_id)?,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleMetaRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    description: Option<String>,
    tags: Vec<String>,
    category: Option<String>,
    hero_image_url: Option<String>,
    pub_date: DateTime<Utc>,
    author_id: i64,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: Option<String>,
    author_email: String,
    comment_count: i64,
    like_count: i64,
}

impl TryFrom<ArticleMetaRow> for ArticleWithMeta {
    type Error = DomainError;

    fn try_from(row: ArticleMetaRow) -> Result<Self, Self::Error> {
        let article = Article::try_from(ArticleRow {
            id: row.id,
            title: row.title,
            slug: row.slug,
            content: row.content,
            description: row.description,
            tags: row.tags,
            category: row.category,
            hero_image_url: row.hero_image_url,
            pub_date: row.pub_date,
            author_id: row.author_id,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;
        Ok(ArticleWithMeta {
            article,
            author_name: row.author_name,
            author_email: row.author_email,
            comment_count: row.comment_count.max(0) as u64,
            like_count: row.like_count.max(0) as u64,
        })
    }
}

fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).expect("midnight always exists"));
    (start, start + chrono::Duration::hours(24))
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            description,
            tags,
            hero_image_url,
            pub_date,
            author_id,
            is_published,
            created_at,
            updated_at,
        } = article;

        let tags: Vec<String> = tags.into();
        let sql = format!(
            "INSERT INTO articles (title, slug, content, description, tags, hero_image_url, \
             pub_date, author_id, is_published, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(description)
        .bind(&tags)
        .bind(hero_image_url)
        .bind(pub_date)
        .bind(i64::from(author_id))
        .bind(is_published)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn set_tags(&self, id: ArticleId, tags: &ArticleTags) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET tags = $2, updated_at = now() WHERE id = $1",
        )
        .bind(i64::from(id))
        .bind(tags.as_slice())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugLookup for PostgresArticleReadRepository {
    async fn count_created_on(&self, day: NaiveDate) -> DomainResult<u64> {
        let (start, end) = day_bounds(day);
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM articles WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(count.max(0) as u64)
    }

    async fn slug_exists(&self, candidate: &str) -> DomainResult<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1)")
            .bind(candidate)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

impl PostgresArticleReadRepository {
    async fn fetch_meta_rows(
        &self,
        builder: &mut QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Vec<ArticleWithMeta>> {
        let rows = builder
            .build_query_as::<ArticleMetaRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleWithMeta::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> DomainResult<Option<ArticleWithMeta>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(META_SELECT);
        builder.push(" WHERE a.slug = ");
        builder.push_bind(slug);
        if published_only {
            builder.push(" AND a.is_published = TRUE");
        }

        let row = builder
            .build_query_as::<ArticleMetaRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleWithMeta::try_from).transpose()
    }

    async fn list_published(
        &self,
        page: u32,
        limit: u32,
        tag: Option<&str>,
    ) -> DomainResult<(Vec<ArticleWithMeta>, u64)> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(META_SELECT);
        builder.push(" WHERE a.is_published = TRUE");
        if let Some(tag) = tag {
            builder.push(" AND ");
            builder.push_bind(tag);
            builder.push(" = ANY(a.tags)");
        }
        builder.push(" ORDER BY a.pub_date DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let articles = self.fetch_meta_rows(&mut builder).await?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a WHERE a.is_published = TRUE");
        if let Some(tag) = tag {
            count_builder.push(" AND ");
            count_builder.push_bind(tag);
            count_builder.push(" = ANY(a.tags)");
        }
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((articles, total.max(0) as u64))
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<ArticleWithMeta>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(META_SELECT);
        builder.push(" WHERE a.is_published = TRUE AND ");
        builder.push_bind(tag);
        builder.push(" = ANY(a.tags) ORDER BY a.pub_date DESC, a.id DESC");

        self.fetch_meta_rows(&mut builder).await
    }

    async fn list_by_category(&self, category: &str) -> DomainResult<Vec<ArticleWithMeta>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(META_SELECT);
        builder.push(" WHERE a.is_published = TRUE AND a.category = ");
        builder.push_bind(category);
        builder.push(" ORDER BY a.pub_date DESC, a.id DESC");

        self.fetch_meta_rows(&mut builder).await
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<ArticleWithMeta>> {
        let pattern = format!("%{}%", escape_like(query));

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(META_SELECT);
        builder.push(" WHERE (a.title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR a.content ILIKE ");
        builder.push_bind(pattern);
        builder.push(" OR ");
        builder.push_bind(query);
        builder.push(" = ANY(a.tags)) ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        self.fetch_meta_rows(&mut builder).await
    }

    async fn month_counts(&self) -> DomainResult<Vec<MonthCount>> {
        let rows: Vec<(i32, i32, i64)> = sqlx::query_as(
            "SELECT EXTRACT(YEAR FROM created_at)::INT AS year, \
                    EXTRACT(MONTH FROM created_at)::INT AS month, \
                    COUNT(*) AS count \
             FROM articles GROUP BY 1, 2 ORDER BY 1 DESC, 2 DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(year, month, count)| MonthCount {
                year,
                month: month.max(1) as u32,
                count: count.max(0) as u64,
            })
            .collect())
    }

    async fn list_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<ArticleWithMeta>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(META_SELECT);
        builder.push(" WHERE a.created_at >= ");
        builder.push_bind(start);
        builder.push(" AND a.created_at < ");
        builder.push_bind(end);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC");

        self.fetch_meta_rows(&mut builder).await
    }

    async fn tag_counts(&self) -> DomainResult<Vec<(String, u64)>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT t.tag, COUNT(*) AS count \
             FROM articles a CROSS JOIN LATERAL unnest(a.tags) AS t(tag) \
             GROUP BY t.tag ORDER BY count DESC, t.tag ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(tag, count)| (tag, count.max(0) as u64))
            .collect())
    }

    async fn list_categorized(&self) -> DomainResult<Vec<CategorizedArticle>> {
        let rows: Vec<(i64, String, String, Vec<String>)> = sqlx::query_as(
            "SELECT id, title, category, tags FROM articles \
             WHERE category IS NOT NULL AND btrim(category) <> '' ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(id, title, category, tags)| {
                Ok(CategorizedArticle {
                    id: ArticleId::new(id)?,
                    title,
                    category,
                    tags: ArticleTags::new(tags),
                })
            })
            .collect()
    }
}

// ILIKE treats % and _ as wildcards; user input should match literally.
fn escape_like(input: &str) -> String {
    input.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_escaping_handles_wildcards() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn day_bounds_are_half_open_utc() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let (start, end) = day_bounds(day);
        assert_eq!(start.to_rfc3339(), "2025-06-15T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-06-16T00:00:00+00:00");
    }
}
