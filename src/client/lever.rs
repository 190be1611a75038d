//! Lever postings API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;

use super::{FetchResult, PostingsApi, RawPosting};
use crate::error::FetchError;

/// Longest error body carried into a `FetchError::Status`
const MAX_ERROR_BODY: usize = 512;

/// Lever postings API client
pub struct LeverClient {
    http: HttpClient,
    api_base: String,
    timeout: Duration,
}

impl LeverClient {
    /// Create a client for `api_base` (the site identifier is appended to it).
    ///
    /// Certificates are always verified against the bundled webpki roots.
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("lever-jobs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::from_reqwest(e, timeout))?;

        Ok(Self {
            http,
            api_base: api_base.into(),
            timeout,
        })
    }

    /// Full endpoint URL for a site; the identifier is not escaped
    pub fn endpoint(&self, site_identifier: &str) -> String {
        format!("{}{}", self.api_base, site_identifier)
    }
}

#[async_trait]
impl PostingsApi for LeverClient {
    async fn fetch_postings(&self, site_identifier: &str) -> FetchResult<Vec<RawPosting>> {
        let url = self.endpoint(site_identifier);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

        if !status.is_success() {
            let mut body = body;
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_postings(&body)
    }
}

/// Parse a postings response body.
///
/// The document must be a JSON array; `[]` is a valid empty result. Elements
/// that are not posting objects are skipped.
pub fn parse_postings(body: &str) -> FetchResult<Vec<RawPosting>> {
    if body.trim().is_empty() {
        return Err(FetchError::Parse("empty response body".to_string()));
    }

    let records: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("expected a JSON array of postings: {}", e)))?;

    let postings = records
        .into_iter()
        .enumerate()
        .filter_map(
            |(position, record)| match serde_json::from_value::<RawPosting>(record) {
                Ok(posting) => Some(posting),
                Err(e) => {
                    log::warn!("Skipping malformed posting #{}: {}", position, e);
                    None
                }
            },
        )
        .collect();

    Ok(postings)
}
