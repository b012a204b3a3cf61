// tests/slug_allocation.rs
//
// The allocator against a stub lookup: date part, per-day sequence and the
// collision suffix chain.
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use uchinokiroku::domain::article::SlugLookup;
use uchinokiroku::domain::article::services::SlugAllocator;
use uchinokiroku::domain::errors::DomainResult;

struct StubLookup {
    counts: Mutex<Vec<(NaiveDate, u64)>>,
    taken: Mutex<HashSet<String>>,
}

impl StubLookup {
    fn new() -> Self {
        Self {
            counts: Mutex::new(Vec::new()),
            taken: Mutex::new(HashSet::new()),
        }
    }

    fn with_count(self, day: NaiveDate, count: u64) -> Self {
        self.counts.lock().unwrap().push((day, count));
        self
    }

    fn with_taken(self, slug: &str) -> Self {
        self.taken.lock().unwrap().insert(slug.to_owned());
        self
    }
}

#[async_trait]
impl SlugLookup for StubLookup {
    async fn count_created_on(&self, day: NaiveDate) -> DomainResult<u64> {
        let counts = self.counts.lock().unwrap();
        Ok(counts
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, c)| *c)
            .unwrap_or(0))
    }

    async fn slug_exists(&self, candidate: &str) -> DomainResult<bool> {
        Ok(self.taken.lock().unwrap().contains(candidate))
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn first_article_of_the_day_gets_sequence_one() {
    let allocator = SlugAllocator::new(Arc::new(StubLookup::new()));
    let slug = allocator
        .allocate("2025-06-15T10:00:00Z".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "20250615001");
}

#[tokio::test]
async fn sequence_is_prior_day_count_plus_one() {
    let lookup = StubLookup::new().with_count(day(2025, 6, 15), 41);
    let allocator = SlugAllocator::new(Arc::new(lookup));
    let slug = allocator
        .allocate("2025-06-15T23:59:59Z".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "20250615042");
}

#[tokio::test]
async fn taken_base_gets_smallest_free_suffix() {
    let lookup = StubLookup::new()
        .with_taken("20250615001")
        .with_taken("20250615001-1");
    let allocator = SlugAllocator::new(Arc::new(lookup));
    let slug = allocator
        .allocate("2025-06-15T10:00:00Z".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "20250615001-2");
}

#[tokio::test]
async fn day_bucket_is_utc() {
    // One second before and at UTC midnight land in different buckets.
    let lookup = StubLookup::new().with_count(day(2025, 6, 15), 5);
    let allocator = SlugAllocator::new(Arc::new(lookup));

    let before_midnight = allocator
        .allocate("2025-06-15T23:59:59Z".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(before_midnight.as_str(), "20250615006");

    let after_midnight = allocator
        .allocate("2025-06-16T00:00:00Z".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(after_midnight.as_str(), "20250616001");
}

#[tokio::test]
async fn sequence_past_999_widens_instead_of_wrapping() {
    let lookup = StubLookup::new().with_count(day(2025, 6, 15), 999);
    let allocator = SlugAllocator::new(Arc::new(lookup));
    let slug = allocator
        .allocate("2025-06-15T12:00:00Z".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "202506151000");
}
