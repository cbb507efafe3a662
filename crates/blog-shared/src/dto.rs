//! Data Transfer Objects - response types for the JSON shape of the pages.

use serde::{Deserialize, Serialize};

/// A post as exposed to JSON clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// Display form, e.g. `05 March 2024 14:30:00`.
    pub timestamp: String,
}

/// One page of the post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub page: u64,
    pub per_page: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
}
