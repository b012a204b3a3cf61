// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            likes::LikeCommandService, users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            likes::LikeQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, SlugLookup, services::SlugAllocator,
        },
        comment::CommentRepository,
        like::LikeRepository,
        user::UserRepository,
    },
};

/// One bundle of every command/query service, wired once at startup and
/// shared behind the HTTP state.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub like_commands: Arc<LikeCommandService>,
    pub like_queries: Arc<LikeQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        slug_lookup: Arc<dyn SlugLookup>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slug_allocator = Arc::new(SlugAllocator::new(slug_lookup));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&user_repo),
            Arc::clone(&slug_allocator),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_read_repo),
        ));

        let like_commands = Arc::new(LikeCommandService::new(
            Arc::clone(&like_repo),
            Arc::clone(&article_read_repo),
        ));
        let like_queries = Arc::new(LikeQueryService::new(
            Arc::clone(&like_repo),
            Arc::clone(&article_read_repo),
        ));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            like_commands,
            like_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
