// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::article::repository::SlugLookup;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;

/// Domain service that assigns date-based slugs to new articles.
///
/// A slug is the creation day formatted `YYYYMMDD` followed by a three-digit
/// per-day sequence number, e.g. the 42nd article posted on 2025-06-15 gets
/// `20250615042`. If that exact slug is already taken (the per-day count and
/// the existing slugs can disagree after clock changes or concurrent
/// inserts), a `-1`, `-2`, … suffix is appended, smallest free counter
/// first.
///
/// The allocator only reads through its [`SlugLookup`]; it never writes.
/// The caller owns the subsequent insert and is expected to re-run
/// allocation if that insert loses a uniqueness race.
pub struct SlugAllocator {
    lookup: Arc<dyn SlugLookup>,
}

impl SlugAllocator {
    pub fn new(lookup: Arc<dyn SlugLookup>) -> Self {
        Self { lookup }
    }

    pub async fn allocate(&self, now: DateTime<Utc>) -> DomainResult<ArticleSlug> {
        // Day bucket is the half-open UTC interval [00:00, 00:00 + 24h).
        let day = now.date_naive();
        let sequence = self.lookup.count_created_on(day).await? + 1;

        // More than 999 posts in one day overflows the fixed width; the
        // suffix loop below still keeps the result unique.
        let base = format!("{}{:03}", day.format("%Y%m%d"), sequence);

        if !self.lookup.slug_exists(&base).await? {
            return ArticleSlug::new(base);
        }

        let mut counter = 1u64;
        loop {
            let candidate = format!("{base}-{counter}");
            if !self.lookup.slug_exists(&candidate).await? {
                return ArticleSlug::new(candidate);
            }
            counter += 1;
        }
    }
}
