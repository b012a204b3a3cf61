pub mod articles;
pub mod comments;
pub mod likes;
pub mod users;
