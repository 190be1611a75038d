//! Raw posting → listing mapping

use std::collections::HashSet;

use super::{ListSection, Listing, ListingCollection};
use crate::client::models::{PostingList, RawPosting};

/// Flatten raw postings into listings, in input order.
///
/// Works record-at-a-time: a posting without an id is skipped, and a repeated
/// id keeps its first occurrence. Missing categories become empty strings.
pub fn normalize(raw: Vec<RawPosting>) -> ListingCollection {
    let mut seen = HashSet::new();
    let mut listings = Vec::with_capacity(raw.len());

    for (position, posting) in raw.into_iter().enumerate() {
        let Some(listing) = normalize_one(posting) else {
            log::warn!("Skipping posting #{} without an id", position);
            continue;
        };

        if !seen.insert(listing.id.clone()) {
            log::warn!("Skipping duplicate posting {}", listing.id);
            continue;
        }

        listings.push(listing);
    }

    listings
}

fn normalize_one(posting: RawPosting) -> Option<Listing> {
    let id = posting.id.filter(|id| !id.is_empty())?;
    let categories = posting.categories.unwrap_or_default();

    Some(Listing {
        id,
        title: posting.text.unwrap_or_default(),
        location: categories.location.unwrap_or_default(),
        commitment: categories.commitment.unwrap_or_default(),
        team: categories.team.unwrap_or_default(),
        description: posting.description_plain.unwrap_or_default(),
        lists: posting
            .lists
            .unwrap_or_default()
            .into_iter()
            .map(normalize_section)
            .collect(),
        additional: posting.additional.unwrap_or_default(),
        hosted_url: posting.hosted_url.unwrap_or_default(),
        apply_url: posting.apply_url.unwrap_or_default(),
        created_at: posting.created_at.unwrap_or_default(),
    })
}

fn normalize_section(list: PostingList) -> ListSection {
    ListSection {
        text: list.text.unwrap_or_default(),
        content: list.content.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::RawCategories;

    fn raw(id: Option<&str>, team: Option<&str>) -> RawPosting {
        RawPosting {
            id: id.map(str::to_string),
            text: Some("Backend Engineer".to_string()),
            categories: Some(RawCategories {
                location: Some("Berlin".to_string()),
                commitment: Some("Full-time".to_string()),
                team: team.map(str::to_string),
                department: None,
            }),
            description: Some("<p>Build things</p>".to_string()),
            description_plain: Some("Build things".to_string()),
            lists: Some(vec![PostingList {
                text: Some("Requirements".to_string()),
                content: Some("<li>Rust</li>".to_string()),
            }]),
            additional: Some("Visa sponsorship available".to_string()),
            hosted_url: Some("https://jobs.lever.co/leverdemo/1".to_string()),
            apply_url: Some("https://jobs.lever.co/leverdemo/1/apply".to_string()),
            created_at: Some(1_700_000_000_000),
        }
    }

    #[test]
    fn test_normalize_maps_fields() {
        let listings = normalize(vec![raw(Some("1"), Some("Engineering"))]);
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing.id, "1");
        assert_eq!(listing.title, "Backend Engineer");
        assert_eq!(listing.location, "Berlin");
        assert_eq!(listing.commitment, "Full-time");
        assert_eq!(listing.team, "Engineering");
        assert_eq!(listing.description, "Build things");
        assert_eq!(listing.lists[0].content, "<li>Rust</li>");
        assert_eq!(listing.additional, "Visa sponsorship available");
        assert_eq!(listing.hosted_url, "https://jobs.lever.co/leverdemo/1");
        assert_eq!(listing.apply_url, "https://jobs.lever.co/leverdemo/1/apply");
        assert_eq!(listing.created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_normalize_missing_categories_become_empty() {
        let posting = RawPosting {
            id: Some("2".to_string()),
            ..Default::default()
        };

        let listings = normalize(vec![posting]);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].team, "");
        assert_eq!(listings[0].location, "");
        assert_eq!(listings[0].commitment, "");
        assert!(listings[0].lists.is_empty());
    }

    #[test]
    fn test_normalize_null_list_fields_become_empty() {
        let mut posting = raw(Some("4"), Some("Design"));
        posting.lists = Some(vec![PostingList {
            text: Some("Benefits".to_string()),
            content: None,
        }]);

        let listings = normalize(vec![posting]);

        assert_eq!(listings[0].lists[0].text, "Benefits");
        assert_eq!(listings[0].lists[0].content, "");
    }

    #[test]
    fn test_normalize_skips_records_without_id() {
        let listings = normalize(vec![
            raw(None, Some("Sales")),
            raw(Some(""), Some("Sales")),
            raw(Some("3"), Some("Sales")),
        ]);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "3");
    }

    #[test]
    fn test_normalize_keeps_first_duplicate_and_order() {
        let listings = normalize(vec![
            raw(Some("b"), Some("Sales")),
            raw(Some("a"), Some("Engineering")),
            raw(Some("b"), Some("Marketing")),
        ]);

        let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(listings[0].team, "Sales");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize(Vec::new()).is_empty());
    }
}
