//! Typed error taxonomy for the feed read path
//!
//! Every failure is classified at the point it happens: bad client input
//! (`InvalidCursor`), a store/decode failure wrapped with the originating
//! operation (`Store`), or an abandoned call (`Cancelled`). Handlers never
//! reconstruct the kind from an untyped payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid pagination cursor")]
    InvalidCursor,

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("feed query cancelled before completion")]
    Cancelled,
}

impl FeedError {
    /// Wrap a store failure with the operation it happened in, for use with
    /// `map_err`.
    pub fn store<E>(context: &'static str) -> impl FnOnce(E) -> FeedError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        move |source| FeedError::Store {
            context,
            source: Box::new(source),
        }
    }

    /// A row that decoded but carries an inconsistent replied-to bundle.
    /// Fatal for the whole call, same as any other row decode failure.
    pub fn malformed_row(parent_id: i64, column: &'static str) -> FeedError {
        FeedError::Store {
            context: "feed.assemble",
            source: format!("replied_to bundle for tweet {parent_id} is missing {column}").into(),
        }
    }
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        let status = match self {
            FeedError::InvalidCursor => StatusCode::BAD_REQUEST,
            FeedError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            FeedError::Cancelled => StatusCode::GATEWAY_TIMEOUT,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "feed request failed");
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_wrapper_keeps_context() {
        let err = FeedError::store("feed.fetch")(std::io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "feed.fetch: connection reset");
    }

    #[test]
    fn test_malformed_row_names_the_column() {
        let err = FeedError::malformed_row(42, "content");
        assert!(err.to_string().contains("tweet 42"));
        assert!(err.to_string().contains("content"));
    }
}
