//! Mock postings client for testing
//!
//! Provides a mock implementation of [`PostingsApi`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::models::{RawCategories, RawPosting};
use super::{FetchResult, PostingsApi};
use crate::error::FetchError;

/// Mock postings client.
///
/// # Example
/// ```ignore
/// let mock = MockPostingsClient::new()
///     .with_postings(vec![MockPostingsClient::posting("1", "Engineering")])
///     .await;
///
/// let postings = mock.fetch_postings("leverdemo").await?;
/// assert_eq!(postings.len(), 1);
/// ```
#[derive(Default)]
pub struct MockPostingsClient {
    /// Postings returned by every successful fetch
    postings: Arc<Mutex<Vec<RawPosting>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<FetchError>>>,
    /// Artificial latency per fetch
    delay: Option<Duration>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Site identifiers requested, in call order
    captured_sites: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub fetch_postings: usize,
}

impl MockPostingsClient {
    /// Create a new mock client returning no postings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure postings to return.
    pub async fn with_postings(self, postings: Vec<RawPosting>) -> Self {
        *self.postings.lock().await = postings;
        self
    }

    /// Configure an error for the next call.
    pub async fn with_error(self, error: FetchError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Delay every fetch, to widen race windows in concurrency tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Replace the postings returned by later calls.
    pub async fn set_postings(&self, postings: Vec<RawPosting>) {
        *self.postings.lock().await = postings;
    }

    /// Get current call counts.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Site identifiers passed to `fetch_postings`.
    pub async fn captured_sites(&self) -> Vec<String> {
        self.captured_sites.lock().await.clone()
    }

    /// A posting with the fields the pipeline cares about.
    pub fn posting(id: &str, team: &str) -> RawPosting {
        RawPosting {
            id: Some(id.to_string()),
            text: Some(format!("Role {}", id)),
            categories: Some(RawCategories {
                location: Some("Remote".to_string()),
                commitment: Some("Full-time".to_string()),
                team: Some(team.to_string()),
                department: None,
            }),
            hosted_url: Some(format!("https://jobs.lever.co/leverdemo/{}", id)),
            apply_url: Some(format!("https://jobs.lever.co/leverdemo/{}/apply", id)),
            created_at: Some(1_700_000_000_000),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PostingsApi for MockPostingsClient {
    async fn fetch_postings(&self, site_identifier: &str) -> FetchResult<Vec<RawPosting>> {
        self.call_count.lock().await.fetch_postings += 1;
        self.captured_sites
            .lock()
            .await
            .push(site_identifier.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.error.lock().await.take() {
            return Err(err);
        }

        Ok(self.postings.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockPostingsClient::new();
        let postings = mock.fetch_postings("leverdemo").await.unwrap();
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_postings() {
        let mock = MockPostingsClient::new()
            .with_postings(vec![
                MockPostingsClient::posting("1", "Engineering"),
                MockPostingsClient::posting("2", "Sales"),
            ])
            .await;

        let postings = mock.fetch_postings("leverdemo").await.unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[1].id.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_mock_client_error_consumed_once() {
        let mock = MockPostingsClient::new()
            .with_error(FetchError::Network("connection reset".to_string()))
            .await;

        assert!(mock.fetch_postings("leverdemo").await.is_err());
        assert!(mock.fetch_postings("leverdemo").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts_and_sites() {
        let mock = MockPostingsClient::new();

        let _ = mock.fetch_postings("acme").await;
        let _ = mock.fetch_postings("globex").await;

        assert_eq!(mock.call_counts().await.fetch_postings, 2);
        assert_eq!(mock.captured_sites().await, vec!["acme", "globex"]);
    }
}
