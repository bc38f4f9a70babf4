//! Feed domain - DB query for the home feed
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&PgPool` (for standalone queries) and `&mut PgConnection` (for
//! transactions).
//!
//! The plan has two stages and keeps them structurally separate in the SQL:
//! an `annotated` CTE computing the per-tweet bundle (author summary, counts,
//! viewer's like flag), then a self-join of that CTE through the reply edge so
//! a reply's embedded parent carries the exact same bundle it would get if
//! fetched on its own.

use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use super::models::FeedRow;
use crate::constants::FEED_PAGE_SIZE;

/// Per-tweet annotation bundle, computed once and reused by both stages.
const ANNOTATED_CTE: &str = r#"
    WITH annotated AS (
        SELECT
            tweets.id,
            tweets.content,
            tweets.photo_urls,
            tweets.created_at,
            users.id AS author_id,
            users.name AS author_name,
            users.handle AS author_handle,
            users.photo_url AS author_photo_url,
            COALESCE(COUNT(DISTINCT replies.id_reply), 0) AS replies_count,
            COALESCE(COUNT(DISTINCT favorites.id), 0) AS favorites_count,
            EXISTS (
                SELECT 1 FROM favorites
                WHERE favorites.id_tweet = tweets.id AND favorites.id_user = $1
            ) AS already_liked
        FROM tweets
            INNER JOIN users ON tweets.id_user = users.id
            LEFT JOIN favorites ON tweets.id = favorites.id_tweet
            LEFT JOIN replies ON tweets.id = replies.id_tweet
        GROUP BY tweets.id, users.id
    )"#;

/// Parsed keyset bound for type-safe query building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorBound {
    /// First page, no lower bound
    First,
    /// Only tweets strictly older than the bound ($2)
    Before,
}

impl CursorBound {
    pub fn from_cursor(cursor: Option<&DateTime<Utc>>) -> Self {
        match cursor {
            Some(_) => CursorBound::Before,
            None => CursorBound::First,
        }
    }

    /// Returns SQL WHERE clause fragment for the keyset filter
    fn where_clause(&self) -> &'static str {
        match self {
            CursorBound::First => "",
            CursorBound::Before => "AND annotated.created_at < $2",
        }
    }
}

/// Build the feed query text for one page request.
///
/// Visibility comes from the follow-edge join alone; the cursor fragment and
/// the ORDER BY / LIMIT establish the page window.
pub fn feed_query(bound: CursorBound) -> String {
    format!(
        r#"{cte}
    SELECT
        annotated.id,
        annotated.content,
        annotated.photo_urls,
        annotated.created_at,
        annotated.author_name,
        annotated.author_handle,
        annotated.author_photo_url,
        annotated.already_liked,
        annotated.favorites_count,
        annotated.replies_count,
        parent.id AS replied_id,
        parent.content AS replied_content,
        parent.photo_urls AS replied_photo_urls,
        parent.author_name AS replied_author_name,
        parent.author_handle AS replied_author_handle,
        parent.author_photo_url AS replied_author_photo_url,
        parent.already_liked AS replied_already_liked,
        parent.favorites_count AS replied_favorites_count,
        parent.replies_count AS replied_replies_count
    FROM annotated
        INNER JOIN follows ON follows.followed_id = annotated.author_id
        LEFT JOIN (
            SELECT replies.id_reply, annotated.*
            FROM replies
                INNER JOIN annotated ON replies.id_tweet = annotated.id
        ) AS parent ON annotated.id = parent.id_reply
    WHERE follows.follower_id = $1
    {cursor_clause}
    ORDER BY annotated.created_at DESC
    LIMIT {limit}"#,
        cte = ANNOTATED_CTE,
        cursor_clause = bound.where_clause(),
        limit = FEED_PAGE_SIZE,
    )
}

/// Fetch one page of feed rows for a viewer, newest first.
pub async fn fetch_feed<'e, E>(
    executor: E,
    viewer_id: i64,
    cursor: Option<DateTime<Utc>>,
) -> Result<Vec<FeedRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let query = feed_query(CursorBound::from_cursor(cursor.as_ref()));

    let fetch = sqlx::query_as(&query).bind(viewer_id);
    let fetch = match cursor {
        Some(bound) => fetch.bind(bound),
        None => fetch,
    };

    fetch.fetch_all(executor).await
}
