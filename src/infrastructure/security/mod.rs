pub mod password;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use token::HmacTokenManager;
