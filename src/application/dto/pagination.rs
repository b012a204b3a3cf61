use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offset pagination block returned alongside article listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl PageMeta {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let pages = if total == 0 || limit == 0 {
            0
        } else {
            ((total - 1) / u64::from(limit) + 1) as u32
        };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}
