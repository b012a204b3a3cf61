// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleWriteRepository, services::SlugAllocator},
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_allocator: Arc<SlugAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            user_repo,
            slug_allocator,
            clock,
        }
    }
}
