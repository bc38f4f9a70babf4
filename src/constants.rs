//! Application constants

use std::time::Duration;

/// Fixed page size for the home feed (not client-configurable)
pub const FEED_PAGE_SIZE: i64 = 10;

/// Default deadline for the single store round trip per feed call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);
