// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use uchinokiroku::application::dto::AuthenticatedUser;
use uchinokiroku::application::ports::time::Clock;
use uchinokiroku::application::services::ApplicationServices;
use uchinokiroku::domain::article::{
    Article, ArticleContent, ArticleSlug, ArticleTags, ArticleTitle, ArticleWriteRepository,
    NewArticle,
};
use uchinokiroku::domain::user::{Email, NewUser, PasswordHash, User, UserRepository};
use uchinokiroku::infrastructure::security::token::HmacTokenManager;

use mocks::{FixedClock, InMemoryDb, PlainPasswordHasher, plain_hash};

const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid RFC 3339 timestamp")
}

pub struct TestApp {
    pub db: Arc<InMemoryDb>,
    pub clock: Arc<FixedClock>,
    pub services: ApplicationServices,
}

pub fn test_app(now: DateTime<Utc>) -> TestApp {
    let db = Arc::new(InMemoryDb::default());
    let clock = Arc::new(FixedClock::at(now));
    let token_manager =
        HmacTokenManager::new(TEST_SECRET, Duration::from_secs(3600)).expect("valid test secret");

    let services = ApplicationServices::new(
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        Arc::new(PlainPasswordHasher),
        Arc::new(token_manager),
        clock.clone(),
    );

    TestApp {
        db,
        clock,
        services,
    }
}

pub async fn seed_user(app: &TestApp, email: &str, name: Option<&str>, password: &str) -> User {
    let new_user = NewUser::new(
        Email::new(email).unwrap(),
        name.map(str::to_owned),
        PasswordHash::new(plain_hash(password)).unwrap(),
        app.clock.now(),
    );
    UserRepository::insert(&*app.db, new_user).await.unwrap()
}

pub fn actor_for(user: &User, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        email: user.email.as_str().to_owned(),
        name: user.name.clone(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

pub fn new_article(
    title: &str,
    slug: &str,
    content: &str,
    tags: &[&str],
    author: &User,
    created_at: DateTime<Utc>,
) -> NewArticle {
    NewArticle::submitted(
        ArticleTitle::new(title).unwrap(),
        ArticleSlug::new(slug).unwrap(),
        ArticleContent::new(content).unwrap(),
        None,
        ArticleTags::new(tags.iter().map(|t| (*t).to_owned())),
        None,
        author.id,
        created_at,
    )
}

pub async fn seed_article(app: &TestApp, article: NewArticle) -> Article {
    ArticleWriteRepository::insert(&*app.db, article)
        .await
        .unwrap()
}
