//! Home feed endpoint (/tweets/feed)

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;
use crate::domain::feed::{FeedEntry, RepliedTo};
use crate::routes::auth::AuthUser;
use crate::services::{error::FeedError, feed};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/tweets/feed", get(get_feed))
}

#[derive(Deserialize)]
struct FeedParams {
    #[serde(default)]
    cursor: String,
}

/// Replied-to summary in a feed entry response
#[derive(Debug, Serialize)]
struct RepliedToResponse {
    id: i64,
    content: String,
    photo_urls: Vec<String>,
    author_name: String,
    author_handle: String,
    author_photo_url: String,
    already_liked: bool,
    favorites_count: i64,
    replies_count: i64,
}

/// Feed entry API response. Field names are the wire contract.
#[derive(Debug, Serialize)]
struct FeedEntryResponse {
    id: i64,
    content: String,
    photo_urls: Vec<String>,
    created_at: DateTime<Utc>,
    author_name: String,
    author_handle: String,
    author_photo_url: String,
    already_liked: bool,
    favorites_count: i64,
    replies_count: i64,
    is_reply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    replied_to: Option<RepliedToResponse>,
}

impl From<RepliedTo> for RepliedToResponse {
    fn from(r: RepliedTo) -> Self {
        Self {
            id: r.id,
            content: r.content,
            photo_urls: r.photo_urls,
            author_name: r.author_name,
            author_handle: r.author_handle,
            author_photo_url: r.author_photo_url,
            already_liked: r.already_liked,
            favorites_count: r.favorites_count,
            replies_count: r.replies_count,
        }
    }
}

impl From<FeedEntry> for FeedEntryResponse {
    fn from(e: FeedEntry) -> Self {
        Self {
            id: e.id,
            content: e.content,
            photo_urls: e.photo_urls,
            created_at: e.created_at,
            author_name: e.author_name,
            author_handle: e.author_handle,
            author_photo_url: e.author_photo_url,
            already_liked: e.already_liked,
            favorites_count: e.favorites_count,
            replies_count: e.replies_count,
            is_reply: e.is_reply,
            replied_to: e.replied_to.map(RepliedToResponse::from),
        }
    }
}

/// GET /tweets/feed - one page of the viewer's home feed, newest first.
/// `cursor` is the `created_at` of the previous page's last entry; absent
/// cursor requests the first page.
async fn get_feed(
    State(state): State<Arc<AppState>>,
    AuthUser(viewer_id): AuthUser,
    Query(params): Query<FeedParams>,
) -> Result<Json<Vec<FeedEntryResponse>>, FeedError> {
    let entries = feed::execute(&state.db, viewer_id, &params.cursor, state.store_timeout).await?;

    Ok(Json(
        entries.into_iter().map(FeedEntryResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(is_reply: bool) -> FeedEntry {
        FeedEntry {
            id: 3,
            content: "nice view".into(),
            photo_urls: vec!["https://img.example/3.png".into()],
            created_at: Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap(),
            author_name: "Ayana".into(),
            author_handle: "ayana".into(),
            author_photo_url: "https://img.example/ayana.png".into(),
            already_liked: true,
            favorites_count: 2,
            replies_count: 0,
            is_reply,
            replied_to: is_reply.then(|| RepliedTo {
                id: 1,
                content: "first".into(),
                photo_urls: vec![],
                author_name: "Badr".into(),
                author_handle: "badr".into(),
                author_photo_url: "https://img.example/badr.png".into(),
                already_liked: false,
                favorites_count: 5,
                replies_count: 1,
            }),
        }
    }

    #[test]
    fn test_replied_to_is_omitted_for_plain_tweets() {
        let json = serde_json::to_value(FeedEntryResponse::from(entry(false))).unwrap();
        assert_eq!(json["is_reply"], false);
        assert!(json.get("replied_to").is_none());
    }

    #[test]
    fn test_reply_wire_shape() {
        let json = serde_json::to_value(FeedEntryResponse::from(entry(true))).unwrap();
        assert_eq!(json["is_reply"], true);
        assert_eq!(json["replied_to"]["id"], 1);
        assert_eq!(json["replied_to"]["already_liked"], false);
        assert_eq!(json["replied_to"]["favorites_count"], 5);
        // nested summary carries no created_at
        assert!(json["replied_to"].get("created_at").is_none());
    }

    #[test]
    fn test_created_at_serializes_as_rfc3339() {
        let json = serde_json::to_value(FeedEntryResponse::from(entry(false))).unwrap();
        let text = json["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(text).is_ok());
    }
}
