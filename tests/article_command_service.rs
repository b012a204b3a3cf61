// tests/article_command_service.rs
use uchinokiroku::application::commands::articles::CreateArticleCommand;
use uchinokiroku::application::error::ApplicationError;
use uchinokiroku::application::ports::time::Clock;
use uchinokiroku::domain::errors::DomainError;
use uchinokiroku::domain::user::UserId;

mod support;

use support::{actor_for, new_article, seed_article, seed_user, test_app, ts};

fn command(title: &str, content: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        title: title.to_owned(),
        content: content.to_owned(),
        description: None,
        tags: None,
        hero_image_url: None,
    }
}

#[tokio::test]
async fn created_article_gets_date_slug_and_is_published() {
    let now = ts("2025-06-15T10:00:00Z");
    let app = test_app(now);
    let author = seed_user(&app, "mama@example.com", Some("ママ"), "secret1").await;

    let article = app
        .services
        .article_commands
        .create_article(
            &actor_for(&author, now),
            CreateArticleCommand {
                title: "  運動会  ".into(),
                content: "かけっこで一位！".into(),
                description: Some("   ".into()),
                tags: Some(vec![" 行事 ".into(), String::new(), "小学校".into()]),
                hero_image_url: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(article.slug, "20250615001");
    assert_eq!(article.title, "運動会");
    assert!(article.is_published);
    assert_eq!(article.pub_date, now);
    assert_eq!(article.description, None);
    assert_eq!(article.tags, vec!["行事".to_owned(), "小学校".to_owned()]);
    assert_eq!(article.author.email, "mama@example.com");
    assert_eq!(article.comment_count, 0);
    assert_eq!(article.like_count, 0);
}

#[tokio::test]
async fn same_day_articles_get_increasing_sequences() {
    let now = ts("2025-06-15T10:00:00Z");
    let app = test_app(now);
    let author = seed_user(&app, "papa@example.com", None, "secret1").await;
    let actor = actor_for(&author, now);

    let first = app
        .services
        .article_commands
        .create_article(&actor, command("一本目", "本文"))
        .await
        .unwrap();
    app.clock.set(ts("2025-06-15T18:30:00Z"));
    let second = app
        .services
        .article_commands
        .create_article(&actor, command("二本目", "本文"))
        .await
        .unwrap();

    assert_eq!(first.slug, "20250615001");
    assert_eq!(second.slug, "20250615002");
}

#[tokio::test]
async fn next_day_restarts_the_sequence() {
    let app = test_app(ts("2025-06-15T10:00:00Z"));
    let author = seed_user(&app, "papa@example.com", None, "secret1").await;
    let actor = actor_for(&author, app.clock.now());

    app.services
        .article_commands
        .create_article(&actor, command("今日", "本文"))
        .await
        .unwrap();

    app.clock.set(ts("2025-06-16T00:00:01Z"));
    let next_day = app
        .services
        .article_commands
        .create_article(&actor, command("翌日", "本文"))
        .await
        .unwrap();

    assert_eq!(next_day.slug, "20250616001");
}

#[tokio::test]
async fn slug_collision_with_existing_row_gets_suffix() {
    let now = ts("2025-06-15T10:00:00Z");
    let app = test_app(now);
    let author = seed_user(&app, "papa@example.com", None, "secret1").await;

    // A row from another day already owns today's base slug, so the per-day
    // count says 1 but the slug is taken.
    seed_article(
        &app,
        new_article(
            "過去の記事",
            "20250615001",
            "本文",
            &[],
            &author,
            ts("2025-05-01T10:00:00Z"),
        ),
    )
    .await;

    let article = app
        .services
        .article_commands
        .create_article(&actor_for(&author, now), command("今日の記事", "本文"))
        .await
        .unwrap();

    assert_eq!(article.slug, "20250615001-1");
}

#[tokio::test]
async fn blank_title_and_content_rejected() {
    let now = ts("2025-06-15T10:00:00Z");
    let app = test_app(now);
    let author = seed_user(&app, "papa@example.com", None, "secret1").await;
    let actor = actor_for(&author, now);

    let err = app
        .services
        .article_commands
        .create_article(&actor, command("   ", "本文"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));

    let err = app
        .services
        .article_commands
        .create_article(&actor, command("タイトル", " \n "))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn unknown_author_is_not_found() {
    let now = ts("2025-06-15T10:00:00Z");
    let app = test_app(now);
    let user = seed_user(&app, "papa@example.com", None, "secret1").await;

    let mut ghost = actor_for(&user, now);
    ghost.id = UserId::new(999).unwrap();

    let err = app
        .services
        .article_commands
        .create_article(&ghost, command("タイトル", "本文"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn lost_slug_race_is_retried() {
    let now = ts("2025-06-15T10:00:00Z");
    let app = test_app(now);
    let author = seed_user(&app, "papa@example.com", None, "secret1").await;

    app.db.fail_next_inserts_with_slug_conflict(2);

    let article = app
        .services
        .article_commands
        .create_article(&actor_for(&author, now), command("タイトル", "本文"))
        .await
        .unwrap();
    assert_eq!(article.slug, "20250615001");
}

#[tokio::test]
async fn persistent_slug_conflict_surfaces_after_retries() {
    let now = ts("2025-06-15T10:00:00Z");
    let app = test_app(now);
    let author = seed_user(&app, "papa@example.com", None, "secret1").await;

    app.db.fail_next_inserts_with_slug_conflict(3);

    let err = app
        .services
        .article_commands
        .create_article(&actor_for(&author, now), command("タイトル", "本文"))
        .await
        .unwrap_err();
    assert!(err.is_slug_conflict());
}
