//! Lever postings API client

use async_trait::async_trait;

use crate::error::FetchError;

pub mod lever;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use lever::LeverClient;
#[cfg(test)]
pub use mock::MockPostingsClient;
pub use models::RawPosting;

/// Result of a remote fetch
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Source of raw postings for a site identifier
#[async_trait]
pub trait PostingsApi: Send + Sync {
    /// Fetch every published posting of a site, in API order
    async fn fetch_postings(&self, site_identifier: &str) -> FetchResult<Vec<RawPosting>>;
}
