// src/application/queries/articles/search.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleSummaryDto, SearchResultsDto},
    error::ApplicationResult,
};

const SEARCH_LIMIT: u32 = 20;
const SEARCH_PREVIEW_CHARS: usize = 100;

impl ArticleQueryService {
    /// Substring search over title and content plus exact tag match. A
    /// blank query returns an empty result instead of everything.
    pub async fn search_articles(&self, query: &str) -> ApplicationResult<SearchResultsDto> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(SearchResultsDto {
                articles: Vec::new(),
                query: query.to_owned(),
                count: 0,
            });
        }

        let rows = self.read_repo.search(trimmed, SEARCH_LIMIT).await?;
        let articles: Vec<_> = rows
            .into_iter()
            .map(|meta| ArticleSummaryDto::from_meta(meta, SEARCH_PREVIEW_CHARS))
            .collect();
        let count = articles.len();

        Ok(SearchResultsDto {
            articles,
            query: trimmed.to_owned(),
            count,
        })
    }
}
