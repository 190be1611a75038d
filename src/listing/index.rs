//! Category indexes over a listing collection

use std::collections::BTreeSet;

use serde::Serialize;

use super::Listing;

/// Axis along which listings are indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CategoryDimension {
    Location,
    Team,
    Commitment,
}

impl std::fmt::Display for CategoryDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryDimension::Location => write!(f, "location"),
            CategoryDimension::Team => write!(f, "team"),
            CategoryDimension::Commitment => write!(f, "commitment"),
        }
    }
}

/// Sorted, deduplicated values of one dimension.
///
/// Ordering is byte-wise and case-sensitive ("Zebra" sorts before "apple").
pub fn build_index(listings: &[Listing], dimension: CategoryDimension) -> Vec<String> {
    listings
        .iter()
        .map(|listing| listing.category(dimension))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// All three indexes of one collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryIndexes {
    pub locations: Vec<String>,
    pub teams: Vec<String>,
    pub commitments: Vec<String>,
}

impl CategoryIndexes {
    pub fn from_collection(listings: &[Listing]) -> Self {
        Self {
            locations: build_index(listings, CategoryDimension::Location),
            teams: build_index(listings, CategoryDimension::Team),
            commitments: build_index(listings, CategoryDimension::Commitment),
        }
    }

    pub fn get(&self, dimension: CategoryDimension) -> &[String] {
        match dimension {
            CategoryDimension::Location => &self.locations,
            CategoryDimension::Team => &self.teams,
            CategoryDimension::Commitment => &self.commitments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::fixtures::listing;

    #[test]
    fn test_team_index_sorted_and_deduplicated() {
        let listings = vec![
            listing("1", "B", "Remote", "Full-time"),
            listing("2", "A", "Remote", "Full-time"),
            listing("3", "A", "Remote", "Full-time"),
            listing("4", "C", "Remote", "Full-time"),
        ];

        assert_eq!(
            build_index(&listings, CategoryDimension::Team),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_index_is_case_sensitive() {
        let listings = vec![
            listing("1", "sales", "berlin", "Part-time"),
            listing("2", "Sales", "Berlin", "Full-time"),
            listing("3", "Zeta", "Austin", "Full-time"),
        ];

        assert_eq!(
            build_index(&listings, CategoryDimension::Team),
            vec!["Sales", "Zeta", "sales"]
        );
        assert_eq!(
            build_index(&listings, CategoryDimension::Location),
            vec!["Austin", "Berlin", "berlin"]
        );
    }

    #[test]
    fn test_empty_category_is_indexed() {
        let listings = vec![
            listing("1", "", "Remote", "Full-time"),
            listing("2", "Design", "Remote", "Full-time"),
        ];

        assert_eq!(
            build_index(&listings, CategoryDimension::Team),
            vec!["", "Design"]
        );
    }

    #[test]
    fn test_empty_collection_yields_empty_indexes() {
        let indexes = CategoryIndexes::from_collection(&[]);
        assert_eq!(indexes, CategoryIndexes::default());
        assert!(build_index(&[], CategoryDimension::Commitment).is_empty());
    }

    #[test]
    fn test_category_indexes_from_collection() {
        let listings = vec![
            listing("1", "Engineering", "Remote", "Full-time"),
            listing("2", "Design", "London", "Contract"),
            listing("3", "Engineering", "London", "Full-time"),
        ];

        let indexes = CategoryIndexes::from_collection(&listings);

        assert_eq!(indexes.locations, vec!["London", "Remote"]);
        assert_eq!(indexes.teams, vec!["Design", "Engineering"]);
        assert_eq!(indexes.commitments, vec!["Contract", "Full-time"]);
        assert_eq!(indexes.get(CategoryDimension::Team), &indexes.teams[..]);
    }
}
