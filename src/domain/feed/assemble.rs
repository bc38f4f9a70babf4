//! Feed domain - reassembly of denormalized rows into feed entries
//!
//! One row in, one entry out, in input order: the query already established
//! the final page order and the page bound, so no sorting or dedup happens
//! here. The only branch is whether the replied-to bundle is present.

use super::models::{FeedEntry, FeedRow, RepliedTo};
use crate::services::error::FeedError;

/// Fold a result set into feed entries.
///
/// Fails the whole call on the first inconsistent row; a partial page is
/// never returned.
pub fn assemble(rows: Vec<FeedRow>) -> Result<Vec<FeedEntry>, FeedError> {
    rows.into_iter().map(entry_from_row).collect()
}

fn entry_from_row(row: FeedRow) -> Result<FeedEntry, FeedError> {
    let FeedRow {
        id,
        content,
        photo_urls,
        created_at,
        author_name,
        author_handle,
        author_photo_url,
        already_liked,
        favorites_count,
        replies_count,
        replied_id,
        replied_content,
        replied_photo_urls,
        replied_author_name,
        replied_author_handle,
        replied_author_photo_url,
        replied_already_liked,
        replied_favorites_count,
        replied_replies_count,
    } = row;

    // Presence of the parent id discriminates reply rows. Once it is there,
    // every other parent column is required; none may default silently.
    let replied_to = match replied_id {
        None => None,
        Some(parent_id) => Some(RepliedTo {
            id: parent_id,
            content: replied_content
                .ok_or_else(|| FeedError::malformed_row(parent_id, "content"))?,
            photo_urls: replied_photo_urls
                .ok_or_else(|| FeedError::malformed_row(parent_id, "photo_urls"))?,
            author_name: replied_author_name
                .ok_or_else(|| FeedError::malformed_row(parent_id, "author_name"))?,
            author_handle: replied_author_handle
                .ok_or_else(|| FeedError::malformed_row(parent_id, "author_handle"))?,
            author_photo_url: replied_author_photo_url
                .ok_or_else(|| FeedError::malformed_row(parent_id, "author_photo_url"))?,
            already_liked: replied_already_liked
                .ok_or_else(|| FeedError::malformed_row(parent_id, "already_liked"))?,
            favorites_count: replied_favorites_count
                .ok_or_else(|| FeedError::malformed_row(parent_id, "favorites_count"))?,
            replies_count: replied_replies_count
                .ok_or_else(|| FeedError::malformed_row(parent_id, "replies_count"))?,
        }),
    };

    Ok(FeedEntry {
        id,
        content,
        photo_urls,
        created_at,
        author_name,
        author_handle,
        author_photo_url,
        already_liked,
        favorites_count,
        replies_count,
        is_reply: replied_to.is_some(),
        replied_to,
    })
}
