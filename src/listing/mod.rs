//! Canonical job listings and the pure functions derived from them
//!
//! - [`normalize`] turns wire postings into [`Listing`]s
//! - [`build_index`] derives sorted category indexes
//! - [`group_by_team`] partitions a collection along the team index

pub mod group;
pub mod index;
pub mod normalize;

use serde::{Deserialize, Serialize};

pub use group::{TeamGroup, group_by_team};
pub use index::{CategoryDimension, CategoryIndexes, build_index};
pub use normalize::normalize;

/// One normalized job posting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    pub commitment: String,
    pub team: String,

    /// Plain-text description
    pub description: String,

    pub lists: Vec<ListSection>,
    pub additional: String,
    pub hosted_url: String,
    pub apply_url: String,

    /// Epoch milliseconds, as reported by the API
    pub created_at: i64,
}

impl Listing {
    /// Value of this listing along one category dimension
    pub fn category(&self, dimension: CategoryDimension) -> &str {
        match dimension {
            CategoryDimension::Location => &self.location,
            CategoryDimension::Team => &self.team,
            CategoryDimension::Commitment => &self.commitment,
        }
    }
}

/// Titled sub-section of a listing, such as "Requirements"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    pub text: String,

    /// HTML fragment of list items
    pub content: String,
}

/// Listings in API response order
pub type ListingCollection = Vec<Listing>;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Listing;

    /// Minimal listing for tests
    pub fn listing(id: &str, team: &str, location: &str, commitment: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Role {}", id),
            location: location.to_string(),
            commitment: commitment.to_string(),
            team: team.to_string(),
            hosted_url: format!("https://jobs.lever.co/leverdemo/{}", id),
            apply_url: format!("https://jobs.lever.co/leverdemo/{}/apply", id),
            ..Default::default()
        }
    }
}
