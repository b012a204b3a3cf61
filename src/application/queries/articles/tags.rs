// src/application/queries/articles/tags.rs
use super::ArticleQueryService;
use crate::application::{dto::TagSummaryDto, error::ApplicationResult};

// The original UI shows a fixed-size tag cloud.
const TAG_LIMIT: usize = 20;

impl ArticleQueryService {
    /// The most-used tags, capped at 20, plus the total number of distinct
    /// tags in use.
    pub async fn tag_summary(&self) -> ApplicationResult<TagSummaryDto> {
        let counts = self.read_repo.tag_counts().await?;
        let total_count = counts.len();
        let tags = counts
            .into_iter()
            .take(TAG_LIMIT)
            .map(|(tag, _)| tag)
            .collect();

        Ok(TagSummaryDto { tags, total_count })
    }
}
