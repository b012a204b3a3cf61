mod create;
mod service;

pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
