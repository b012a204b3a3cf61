// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash as StoredHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id at the RFC 9106 low-memory parameters the `argon2` crate
/// ships as defaults (19 MiB, t=2, p=1). Hashing is CPU-bound, so both
/// operations run on the blocking pool instead of the request executor.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn argon2() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::DEFAULT)
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| {
                    ApplicationError::infrastructure(format!("password hashing failed: {err}"))
                })
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("hashing task failed: {err}")))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let stored = StoredHash::new(&expected_hash).map_err(|err| {
                ApplicationError::infrastructure(format!("stored password hash unreadable: {err}"))
            })?;
            argon2()
                .verify_password(password.as_bytes(), &stored)
                .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("hashing task failed: {err}")))?
    }
}
