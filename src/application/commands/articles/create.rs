// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleTags, ArticleTitle, ArticleWithMeta, NewArticle},
};

/// How many times a lost slug-uniqueness race is retried before the
/// conflict is surfaced to the caller.
const MAX_SLUG_ATTEMPTS: u32 = 3;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub hero_image_url: Option<String>,
}

impl ArticleCommandService {
    /// Validate the submission, allocate a date-based slug and persist the
    /// article. Allocation and insert are not atomic, so a concurrent
    /// creation can win the slug between our existence check and the
    /// insert; the unique constraint catches that and the whole
    /// allocate+insert sequence is re-run.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let description = normalize_optional(command.description);
        let hero_image_url = normalize_optional(command.hero_image_url);
        let tags = ArticleTags::new(command.tags.unwrap_or_default());

        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut last_conflict = None;
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let now = self.clock.now();
            let slug = self.slug_allocator.allocate(now).await?;

            let new_article = NewArticle::submitted(
                title.clone(),
                slug,
                content.clone(),
                description.clone(),
                tags.clone(),
                hero_image_url.clone(),
                author.id,
                now,
            );

            match self.write_repo.insert(new_article).await {
                Ok(article) => {
                    tracing::info!(slug = %article.slug, author = %author.email, "article created");
                    return Ok(ArticleDto::from(ArticleWithMeta {
                        article,
                        author_name: author.name.clone(),
                        author_email: author.email.as_str().to_owned(),
                        comment_count: 0,
                        like_count: 0,
                    }));
                }
                Err(err) => {
                    let err = ApplicationError::from(err);
                    if err.is_slug_conflict() {
                        tracing::warn!(attempt, "slug insert lost a race, reallocating");
                        last_conflict = Some(err);
                        continue;
                    }
                    return Err(err);
                }
            }
        }

        Err(last_conflict
            .unwrap_or_else(|| ApplicationError::conflict("could not allocate a unique slug")))
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}
