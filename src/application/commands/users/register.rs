use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(email, command.name, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(email = %user.email, "user registered");

        Ok(user.into())
    }
}
