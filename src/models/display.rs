//! Display model implementations for table and JSON output

use serde::Serialize;
use tabled::Tabled;

use crate::listing::{CategoryDimension, CategoryIndexes, Listing};
use crate::output::formatters::format_date;

/// Listing row for table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ListingDisplay {
    #[tabled(rename = "TEAM")]
    pub team: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "COMMITMENT")]
    pub commitment: String,

    /// Posting date (UTC)
    #[tabled(rename = "POSTED")]
    pub posted: String,

    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&Listing> for ListingDisplay {
    fn from(listing: &Listing) -> Self {
        Self {
            team: listing.team.clone(),
            title: listing.title.clone(),
            location: listing.location.clone(),
            commitment: listing.commitment.clone(),
            posted: format_date(listing.created_at),
            url: listing.hosted_url.clone(),
        }
    }
}

/// One value of one category dimension
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct CategoryDisplay {
    #[tabled(rename = "DIMENSION")]
    pub dimension: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl CategoryDisplay {
    /// Flatten indexes into rows, dimension by dimension
    pub fn rows(indexes: &CategoryIndexes, only: Option<CategoryDimension>) -> Vec<Self> {
        let dimensions = match only {
            Some(dim) => vec![dim],
            None => vec![
                CategoryDimension::Location,
                CategoryDimension::Team,
                CategoryDimension::Commitment,
            ],
        };

        dimensions
            .into_iter()
            .flat_map(|dim| {
                indexes.get(dim).iter().map(move |value| Self {
                    dimension: dim.to_string(),
                    value: value.clone(),
                })
            })
            .collect()
    }
}
