//! Opaque pagination cursor codec for the home feed
//!
//! The cursor is the `created_at` of the last entry of the previous page,
//! rendered as RFC3339 text. Keyset pagination: the next page is "everything
//! strictly older than this", immune to insertion-caused shifting.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::services::error::FeedError;

/// Decode a cursor token into an exclusive lower bound on `created_at`.
///
/// An empty token is a first-page request, not an error. Anything non-empty
/// must parse as RFC3339 or the call fails with `InvalidCursor` before the
/// store is ever touched.
pub fn decode(token: &str) -> Result<Option<DateTime<Utc>>, FeedError> {
    if token.is_empty() {
        return Ok(None);
    }

    DateTime::parse_from_rfc3339(token)
        .map(|t| Some(t.with_timezone(&Utc)))
        .map_err(|_| FeedError::InvalidCursor)
}

/// Encode an ordering key as a cursor token.
///
/// Microsecond precision matches Postgres `timestamptz`, so every key the
/// store can produce round-trips through `decode`.
pub fn encode(key: DateTime<Utc>) -> String {
    key.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_token_is_first_page() {
        assert_eq!(decode("").unwrap(), None);
    }

    #[test]
    fn test_round_trip() {
        let key = Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap()
            + chrono::Duration::microseconds(589_793);
        assert_eq!(decode(&encode(key)).unwrap(), Some(key));
    }

    #[test]
    fn test_offset_timestamps_normalize_to_utc() {
        let bound = decode("2021-03-14T09:26:53+07:00").unwrap().unwrap();
        assert_eq!(bound, Utc.with_ymd_and_hms(2021, 3, 14, 2, 26, 53).unwrap());
    }

    #[test]
    fn test_garbage_is_invalid_cursor() {
        for token in ["not-a-date", "2021-03-14", "1615714013", "2021-03-14 09:26:53"] {
            assert!(matches!(decode(token), Err(FeedError::InvalidCursor)), "{token}");
        }
    }
}
