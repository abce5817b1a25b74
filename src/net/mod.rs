//! Network layer for the comment-submission exchange.

pub mod api;
pub mod types;
