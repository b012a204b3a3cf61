pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::{
    ArticleReadRepository, ArticleWithMeta, ArticleWriteRepository, CategorizedArticle,
    MonthCount, SlugLookup,
};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTags, ArticleTitle};
