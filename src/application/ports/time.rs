// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now". Injected so slug allocation and timestamping can be
/// pinned to a fixed instant in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
