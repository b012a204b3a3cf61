use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Like state of one article as seen by the calling user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusDto {
    pub like_count: u64,
    pub is_liked: bool,
}
