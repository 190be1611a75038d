//! Team grouping of listings for rendering

use serde::Serialize;

use super::Listing;

/// Listings of one team, borrowed from the collection they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamGroup<'a> {
    pub team: &'a str,
    pub listings: Vec<&'a Listing>,
}

/// One group per entry of `teams`, in the same order.
///
/// Listings keep their relative order from `listings`. A team with no
/// matching listing still gets an (empty) group.
pub fn group_by_team<'a>(listings: &'a [Listing], teams: &'a [String]) -> Vec<TeamGroup<'a>> {
    teams
        .iter()
        .map(|team| TeamGroup {
            team: team.as_str(),
            listings: listings.iter().filter(|l| l.team == *team).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::fixtures::listing;
    use crate::listing::{CategoryDimension, build_index};

    #[test]
    fn test_grouping_is_total_over_teams() {
        let listings = vec![
            listing("1", "A", "Remote", "Full-time"),
            listing("2", "A", "Remote", "Full-time"),
        ];
        let teams = vec!["A".to_string(), "B".to_string()];

        let groups = group_by_team(&listings, &teams);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].team, "A");
        assert_eq!(groups[0].listings.len(), 2);
        assert_eq!(groups[1].team, "B");
        assert!(groups[1].listings.is_empty());
    }

    #[test]
    fn test_grouping_preserves_relative_order() {
        let listings = vec![
            listing("3", "Sales", "Remote", "Full-time"),
            listing("1", "Design", "Remote", "Full-time"),
            listing("2", "Sales", "Remote", "Full-time"),
        ];
        let teams = build_index(&listings, CategoryDimension::Team);

        let groups = group_by_team(&listings, &teams);

        assert_eq!(groups[0].team, "Design");
        let sales: Vec<&str> = groups[1].listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(sales, vec!["3", "2"]);
    }

    #[test]
    fn test_grouping_empty_collection() {
        let groups = group_by_team(&[], &[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_serializes_listings_inline() {
        let listings = vec![listing("1", "Ops", "Remote", "Contract")];
        let teams = vec!["Ops".to_string()];

        let json = serde_json::to_value(group_by_team(&listings, &teams)).unwrap();

        assert_eq!(json[0]["team"], "Ops");
        assert_eq!(json[0]["listings"][0]["id"], "1");
    }
}
