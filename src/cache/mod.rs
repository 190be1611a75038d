//! Cached listings
//!
//! A single transient entry (`lever_positions`) holds the normalized
//! listings of one site for a fixed TTL. Misses fetch through the
//! [`PostingsApi`](crate::client::PostingsApi), with concurrent misses
//! coalesced into one request.

pub mod client;
pub mod storage;

use std::time::Duration;

/// Transient key of the listings entry
pub const POSITIONS_KEY: &str = "lever_positions";

/// Default lifetime of the listings entry
pub const POSITIONS_TTL: Duration = Duration::from_secs(24 * 60 * 60); // 24 hr

pub use client::{CacheEntry, ListingCache};
pub use storage::CacheStorage;
