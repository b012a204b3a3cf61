use crate::application::error::{ApplicationError, ApplicationResult};

// Deliberately lax: the audience is a handful of family members, some of
// them not comfortable with long passwords.
const MIN_PASSWORD_CHARS: usize = 6;

pub fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApplicationError::validation(
            "password must be at least 6 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_rejected() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }
}
