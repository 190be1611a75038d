//! Wire models for the Lever postings API

use serde::{Deserialize, Serialize};

/// A posting exactly as returned by `GET /v0/postings/<site>`.
///
/// Every field is optional; the normalizer decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosting {
    #[serde(default)]
    pub id: Option<String>,

    /// Posting title
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub categories: Option<RawCategories>,

    /// HTML description (not used, kept for completeness of the wire shape)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub description_plain: Option<String>,

    #[serde(default)]
    pub lists: Option<Vec<PostingList>>,

    #[serde(default)]
    pub additional: Option<String>,

    #[serde(default)]
    pub hosted_url: Option<String>,

    #[serde(default)]
    pub apply_url: Option<String>,

    /// Epoch milliseconds
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Nested category block of a posting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCategories {
    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub commitment: Option<String>,

    #[serde(default)]
    pub team: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// One structured sub-section of a posting ("Requirements", "Benefits", ...)
///
/// Either field may be absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    #[serde(default)]
    pub text: Option<String>,

    /// HTML fragment of list items
    #[serde(default)]
    pub content: Option<String>,
}
