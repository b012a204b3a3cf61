// tests/support/mocks.rs
//
// In-memory stand-ins for the Postgres repositories. One store implements
// every repository trait so a test wires the services against a single
// `Arc<InMemoryDb>`.
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use uchinokiroku::application::error::{ApplicationError, ApplicationResult};
use uchinokiroku::application::ports::security::PasswordHasher;
use uchinokiroku::application::ports::time::Clock;
use uchinokiroku::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTags, ArticleWithMeta,
    ArticleWriteRepository, CategorizedArticle, MonthCount, NewArticle, SlugLookup,
};
use uchinokiroku::domain::comment::{
    Comment, CommentId, CommentRepository, CommentWithAuthor, NewComment,
};
use uchinokiroku::domain::errors::{DomainError, DomainResult};
use uchinokiroku::domain::like::LikeRepository;
use uchinokiroku::domain::user::{NewUser, User, UserId, UserRepository};

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Reversible "hash" so tests can seed users without running argon2.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(plain_hash(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if plain_hash(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub fn plain_hash(password: &str) -> String {
    format!("plain${password}")
}

#[derive(Default)]
pub struct InMemoryDb {
    users: Mutex<Vec<User>>,
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<Comment>>,
    likes: Mutex<Vec<(i64, i64)>>,
    next_user_id: AtomicI64,
    next_article_id: AtomicI64,
    next_comment_id: AtomicI64,
    pending_insert_conflicts: AtomicU32,
}

impl InMemoryDb {
    /// Make the next `n` article inserts fail the way a lost slug
    /// uniqueness race does.
    pub fn fail_next_inserts_with_slug_conflict(&self, n: u32) {
        self.pending_insert_conflicts.store(n, Ordering::SeqCst);
    }

    /// Backfill the legacy category column on a stored article.
    pub fn set_category(&self, id: ArticleId, category: &str) {
        let mut articles = self.articles.lock().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| a.id == id) {
            article.category = Some(category.to_owned());
        }
    }

    pub fn set_unpublished(&self, id: ArticleId) {
        let mut articles = self.articles.lock().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| a.id == id) {
            article.is_published = false;
        }
    }

    fn author_fields(&self, author_id: UserId) -> (Option<String>, String) {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|u| u.id == author_id)
            .map(|u| (u.name.clone(), u.email.as_str().to_owned()))
            .unwrap_or((None, String::new()))
    }

    fn with_meta(&self, article: Article) -> ArticleWithMeta {
        let article_id = i64::from(article.id);
        let comment_count = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| i64::from(c.article_id) == article_id)
            .count() as u64;
        let like_count = self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| *a == article_id)
            .count() as u64;
        let (author_name, author_email) = self.author_fields(article.author_id);
        ArticleWithMeta {
            article,
            author_name,
            author_email,
            comment_count,
            like_count,
        }
    }

    fn sorted_newest_first(&self, mut rows: Vec<Article>) -> Vec<Article> {
        rows.sort_by(|a, b| {
            b.pub_date
                .cmp(&a.pub_date)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        rows
    }
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id: UserId::new(id)?,
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(
        &self,
        email: &uchinokiroku::domain::user::Email,
    ) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryDb {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        if self.pending_insert_conflicts.load(Ordering::SeqCst) > 0 {
            self.pending_insert_conflicts.fetch_sub(1, Ordering::SeqCst);
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let mut articles = self.articles.lock().unwrap();
        if articles
            .iter()
            .any(|a| a.slug.as_str() == article.slug.as_str())
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = self.next_article_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            description: article.description,
            tags: article.tags,
            category: None,
            hero_image_url: article.hero_image_url,
            pub_date: article.pub_date,
            author_id: article.author_id,
            is_published: article.is_published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn set_tags(&self, id: ArticleId, tags: &ArticleTags) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.tags = ArticleTags::new(tags.as_slice().to_vec());
        Ok(())
    }
}

#[async_trait]
impl SlugLookup for InMemoryDb {
    async fn count_created_on(&self, day: NaiveDate) -> DomainResult<u64> {
        let start = Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap());
        let end = start + chrono::Duration::hours(24);
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .iter()
            .filter(|a| a.created_at >= start && a.created_at < end)
            .count() as u64)
    }

    async fn slug_exists(&self, candidate: &str) -> DomainResult<bool> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().any(|a| a.slug.as_str() == candidate))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryDb {
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> DomainResult<Option<ArticleWithMeta>> {
        let article = {
            let articles = self.articles.lock().unwrap();
            articles
                .iter()
                .find(|a| a.slug.as_str() == slug && (!published_only || a.is_published))
                .cloned()
        };
        Ok(article.map(|a| self.with_meta(a)))
    }

    async fn list_published(
        &self,
        page: u32,
        limit: u32,
        tag: Option<&str>,
    ) -> DomainResult<(Vec<ArticleWithMeta>, u64)> {
        let rows: Vec<Article> = {
            let articles = self.articles.lock().unwrap();
            articles
                .iter()
                .filter(|a| a.is_published)
                .filter(|a| tag.is_none_or(|t| a.tags.contains(t)))
                .cloned()
                .collect()
        };
        let rows = self.sorted_newest_first(rows);
        let total = rows.len() as u64;
        let offset = (page.saturating_sub(1) as usize) * limit as usize;
        let page_rows = rows
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .map(|a| self.with_meta(a))
            .collect();
        Ok((page_rows, total))
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<ArticleWithMeta>> {
        let rows: Vec<Article> = {
            let articles = self.articles.lock().unwrap();
            articles
                .iter()
                .filter(|a| a.is_published && a.tags.contains(tag))
                .cloned()
                .collect()
        };
        Ok(self
            .sorted_newest_first(rows)
            .into_iter()
            .map(|a| self.with_meta(a))
            .collect())
    }

    async fn list_by_category(&self, category: &str) -> DomainResult<Vec<ArticleWithMeta>> {
        let rows: Vec<Article> = {
            let articles = self.articles.lock().unwrap();
            articles
                .iter()
                .filter(|a| a.is_published && a.category.as_deref() == Some(category))
                .cloned()
                .collect()
        };
        Ok(self
            .sorted_newest_first(rows)
            .into_iter()
            .map(|a| self.with_meta(a))
            .collect())
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<ArticleWithMeta>> {
        let needle = query.to_lowercase();
        let mut rows: Vec<Article> = {
            let articles = self.articles.lock().unwrap();
            articles
                .iter()
                .filter(|a| {
                    a.title.as_str().to_lowercase().contains(&needle)
                        || a.content.as_str().to_lowercase().contains(&needle)
                        || a.tags.contains(query)
                })
                .cloned()
                .collect()
        };
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|a| self.with_meta(a))
            .collect())
    }

    async fn month_counts(&self) -> DomainResult<Vec<MonthCount>> {
        let mut buckets: HashMap<(i32, u32), u64> = HashMap::new();
        {
            let articles = self.articles.lock().unwrap();
            for article in articles.iter() {
                let key = (article.created_at.year(), article.created_at.month());
                *buckets.entry(key).or_default() += 1;
            }
        }
        let mut months: Vec<MonthCount> = buckets
            .into_iter()
            .map(|((year, month), count)| MonthCount { year, month, count })
            .collect();
        months.sort_by(|a, b| b.year.cmp(&a.year).then(b.month.cmp(&a.month)));
        Ok(months)
    }

    async fn list_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<ArticleWithMeta>> {
        let mut rows: Vec<Article> = {
            let articles = self.articles.lock().unwrap();
            articles
                .iter()
                .filter(|a| a.created_at >= start && a.created_at < end)
                .cloned()
                .collect()
        };
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows.into_iter().map(|a| self.with_meta(a)).collect())
    }

    async fn tag_counts(&self) -> DomainResult<Vec<(String, u64)>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        {
            let articles = self.articles.lock().unwrap();
            for article in articles.iter() {
                for tag in article.tags.as_slice() {
                    *counts.entry(tag.clone()).or_default() += 1;
                }
            }
        }
        let mut counts: Vec<(String, u64)> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        Ok(counts)
    }

    async fn list_categorized(&self) -> DomainResult<Vec<CategorizedArticle>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .iter()
            .filter_map(|a| {
                let category = a.category.as_deref()?.trim();
                if category.is_empty() {
                    return None;
                }
                Some(CategorizedArticle {
                    id: a.id,
                    title: a.title.as_str().to_owned(),
                    category: category.to_owned(),
                    tags: ArticleTags::new(a.tags.as_slice().to_vec()),
                })
            })
            .collect())
    }
}

#[async_trait]
impl CommentRepository for InMemoryDb {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at,
        };
        self.comments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let mut rows: Vec<Comment> = {
            let comments = self.comments.lock().unwrap();
            comments
                .iter()
                .filter(|c| c.article_id == article_id)
                .cloned()
                .collect()
        };
        rows.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(rows
            .into_iter()
            .map(|comment| {
                let (author_name, author_email) = self.author_fields(comment.user_id);
                CommentWithAuthor {
                    comment,
                    author_name,
                    author_email,
                }
            })
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryDb {
    async fn exists(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let likes = self.likes.lock().unwrap();
        Ok(likes.contains(&(i64::from(article_id), i64::from(user_id))))
    }

    async fn insert(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        let mut likes = self.likes.lock().unwrap();
        let key = (i64::from(article_id), i64::from(user_id));
        if likes.contains(&key) {
            return Err(DomainError::Conflict("article already liked".into()));
        }
        likes.push(key);
        Ok(())
    }

    async fn delete(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let mut likes = self.likes.lock().unwrap();
        let key = (i64::from(article_id), i64::from(user_id));
        let before = likes.len();
        likes.retain(|k| *k != key);
        Ok(likes.len() < before)
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let likes = self.likes.lock().unwrap();
        Ok(likes
            .iter()
            .filter(|(a, _)| *a == i64::from(article_id))
            .count() as u64)
    }
}
