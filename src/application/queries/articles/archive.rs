// src/application/queries/articles/archive.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{ArchiveIndexDto, ArchiveMonthDto, ArticleSummaryDto, MonthBucketDto},
    error::{ApplicationError, ApplicationResult},
};
use chrono::{NaiveDate, TimeZone, Utc};

const ARCHIVE_PREVIEW_CHARS: usize = 150;

impl ArticleQueryService {
    /// Posting counts grouped by calendar month, newest month first.
    pub async fn archive_index(&self) -> ApplicationResult<ArchiveIndexDto> {
        let months = self.read_repo.month_counts().await?;
        let archive: Vec<MonthBucketDto> = months.into_iter().map(MonthBucketDto::from).collect();
        let total_months = archive.len();

        Ok(ArchiveIndexDto {
            archive,
            total_months,
        })
    }

    /// Articles created within one calendar month, `year_month` in
    /// `YYYY-MM` form.
    pub async fn archive_month(&self, year_month: &str) -> ApplicationResult<ArchiveMonthDto> {
        let (year, month) = parse_year_month(year_month)?;

        let start_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ApplicationError::validation("invalid year-month format"))?;
        let end_day = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| ApplicationError::validation("invalid year-month format"))?;

        let start = Utc.from_utc_datetime(&start_day.and_hms_opt(0, 0, 0).unwrap());
        let end = Utc.from_utc_datetime(&end_day.and_hms_opt(0, 0, 0).unwrap());

        let rows = self.read_repo.list_created_between(start, end).await?;
        let articles: Vec<_> = rows
            .into_iter()
            .map(|meta| ArticleSummaryDto::from_meta(meta, ARCHIVE_PREVIEW_CHARS))
            .collect();
        let count = articles.len();

        Ok(ArchiveMonthDto {
            articles,
            year_month: year_month.to_owned(),
            year,
            month,
            count,
        })
    }
}

fn parse_year_month(value: &str) -> ApplicationResult<(i32, u32)> {
    let invalid = || ApplicationError::validation("invalid year-month format");

    let (year_part, month_part) = value.split_once('-').ok_or_else(invalid)?;
    if year_part.len() != 4 || month_part.len() != 2 {
        return Err(invalid());
    }
    // str::parse accepts a leading '+', which the digits-only form does not.
    if !year_part.bytes().all(|b| b.is_ascii_digit())
        || !month_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let year: i32 = year_part.parse().map_err(|_| invalid())?;
    let month: u32 = month_part.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}
