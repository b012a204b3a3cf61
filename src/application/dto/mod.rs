pub mod articles;
pub mod auth;
pub mod comments;
pub mod likes;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use articles::{
    ArchiveIndexDto, ArchiveMonthDto, ArticleDto, ArticleListDto, ArticleSummaryDto,
    MonthBucketDto, SearchResultsDto, TagSummaryDto,
};
pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResponseDto, TokenSubject};
pub use comments::{CommentDto, CommentListDto};
pub use likes::LikeStatusDto;
pub use pagination::PageMeta;
pub use users::{AuthorDto, UserDto};
