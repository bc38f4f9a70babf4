//! Feed domain - models, query plan, and row assembly for the home feed

pub mod assemble;
pub mod models;
pub mod queries;

pub use models::{FeedEntry, RepliedTo};
