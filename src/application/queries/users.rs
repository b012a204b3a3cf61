// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserRepository,
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_id(actor.id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
