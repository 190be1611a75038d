//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Lever site the data was read for
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub site: Option<String>,

    /// Number of items when `data` is a list
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<usize>,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                site: None,
                count: None,
            },
        }
    }

    /// Record the site identifier in the metadata
    pub fn with_site(mut self, site: &str) -> Self {
        self.meta.site = Some(site.to_string());
        self
    }

    /// Record the item count in the metadata
    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Format a site's list as pretty-printed JSON with site and count metadata
pub fn format_site_json<T: Serialize>(site: &str, items: &[T]) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(items)
        .with_site(site)
        .with_count(items.len());
    serde_json::to_string_pretty(&output)
}
