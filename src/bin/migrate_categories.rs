// src/bin/migrate_categories.rs
//
// One-shot batch tool that folds the legacy `category` column into `tags`:
// every article whose category is not already present in its tag list gets
// the category prepended. Safe to re-run; already-migrated rows are skipped.
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uchinokiroku::config::AppConfig;
use uchinokiroku::domain::article::{ArticleReadRepository, ArticleTags, ArticleWriteRepository};
use uchinokiroku::infrastructure::{
    database,
    repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let read_repo = PostgresArticleReadRepository::new(pool.clone());
    let write_repo = PostgresArticleWriteRepository::new(pool);

    let rows = read_repo.list_categorized().await?;
    tracing::info!(total = rows.len(), "articles with a legacy category");

    let mut migrated = 0usize;
    let mut skipped = 0usize;
    for row in rows {
        if row.tags.contains(&row.category) {
            skipped += 1;
            continue;
        }

        let mut tags = vec![row.category.clone()];
        tags.extend(row.tags.as_slice().iter().cloned());
        write_repo.set_tags(row.id, &ArticleTags::new(tags)).await?;

        tracing::info!(
            article_id = i64::from(row.id),
            title = %row.title,
            category = %row.category,
            "category folded into tags"
        );
        migrated += 1;
    }

    tracing::info!(migrated, skipped, "category migration finished");
    Ok(())
}
