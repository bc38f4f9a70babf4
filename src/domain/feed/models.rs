//! Feed model definitions

use chrono::{DateTime, Utc};

/// One flat denormalized row from the feed query.
///
/// The `replied_*` columns come from a LEFT JOIN against the reply edge:
/// either the candidate tweet is a reply and every one of them is non-null,
/// or it is not and all of them are null. The assembler treats anything in
/// between as a malformed row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeedRow {
    pub id: i64,
    pub content: String,
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
    pub author_handle: String,
    pub author_photo_url: String,
    pub already_liked: bool,
    pub favorites_count: i64,
    pub replies_count: i64,
    pub replied_id: Option<i64>,
    pub replied_content: Option<String>,
    pub replied_photo_urls: Option<Vec<String>>,
    pub replied_author_name: Option<String>,
    pub replied_author_handle: Option<String>,
    pub replied_author_photo_url: Option<String>,
    pub replied_already_liked: Option<bool>,
    pub replied_favorites_count: Option<i64>,
    pub replied_replies_count: Option<i64>,
}

/// Summarized view of the tweet a feed entry replies to, annotated from the
/// same viewer's perspective as the entry itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RepliedTo {
    pub id: i64,
    pub content: String,
    pub photo_urls: Vec<String>,
    pub author_name: String,
    pub author_handle: String,
    pub author_photo_url: String,
    pub already_liked: bool,
    pub favorites_count: i64,
    pub replies_count: i64,
}

/// One entry of a viewer's home feed. Derived, never persisted.
///
/// `is_reply` holds iff `replied_to` is present.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: i64,
    pub content: String,
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
    pub author_handle: String,
    pub author_photo_url: String,
    pub already_liked: bool,
    pub favorites_count: i64,
    pub replies_count: i64,
    pub is_reply: bool,
    pub replied_to: Option<RepliedTo>,
}
