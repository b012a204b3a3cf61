// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: Option<String>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: Option<String>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        name: Option<String>,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        let name = name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());
        Self {
            email,
            name,
            password_hash,
            created_at,
        }
    }
}
