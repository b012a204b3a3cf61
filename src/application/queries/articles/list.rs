// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, ArticleListDto, PageMeta},
    error::ApplicationResult,
};

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub tag: Option<String>,
}

impl ArticleQueryService {
    /// Published articles, newest first, with author and interaction counts.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let tag = query.tag.as_deref().map(str::trim).filter(|t| !t.is_empty());

        let (rows, total) = self.read_repo.list_published(page, limit, tag).await?;

        Ok(ArticleListDto {
            articles: rows.into_iter().map(ArticleDto::from).collect(),
            pagination: PageMeta::new(page, limit, total),
        })
    }

    pub async fn list_by_tag(&self, tag: &str) -> ApplicationResult<Vec<ArticleDto>> {
        let rows = self.read_repo.list_by_tag(tag).await?;
        Ok(rows.into_iter().map(ArticleDto::from).collect())
    }

    /// Legacy listing over the pre-tags `category` column.
    pub async fn list_by_category(&self, category: &str) -> ApplicationResult<Vec<ArticleDto>> {
        let rows = self.read_repo.list_by_category(category).await?;
        Ok(rows.into_iter().map(ArticleDto::from).collect())
    }
}
