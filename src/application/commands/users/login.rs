use super::UserCommandService;
use crate::{
    application::{
        dto::{LoginResponseDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResponseDto> {
        let email = Email::new(command.email)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let token = self
            .token_manager
            .issue(TokenSubject::from_user(&user))
            .await?;
        let user_dto: UserDto = user.into();

        Ok(LoginResponseDto {
            token,
            user: user_dto,
        })
    }
}
