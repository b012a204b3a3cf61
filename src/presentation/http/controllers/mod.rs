pub mod archive;
pub mod articles;
pub mod auth;
pub mod comments;
pub mod health;
pub mod likes;
