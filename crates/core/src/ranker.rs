//! Relevance ranking over a dataset snapshot
//!
//! Ranking is a pure total reordering: no records are dropped or added and
//! the input is left untouched, so the cached snapshot can be re-ranked
//! for every page request against the same cache entry.

use crate::types::{RawRecord, SearchQuery};
use std::cmp::Ordering;

/// Reorder records by relevance to the query
///
/// Order:
/// 1. The first record whose username equals the query (case-insensitive)
///    is pinned to position 0. Further exact matches are not pinned; they
///    sort with the rest.
/// 2. The remainder is stably sorted so that usernames starting with the
///    query come first, and within the same prefix group shorter usernames
///    come first. Ties keep their original relative order.
///
/// A missing username compares as the empty string.
pub fn rank(records: &[RawRecord], query: &SearchQuery) -> Vec<RawRecord> {
    let term = query.as_str();

    let mut pinned: Option<RawRecord> = None;
    let mut pool: Vec<(String, RawRecord)> = Vec::with_capacity(records.len());

    for record in records {
        let username = record.normalized_username();
        if pinned.is_none() && username == term {
            pinned = Some(record.clone());
        } else {
            pool.push((username, record.clone()));
        }
    }

    // Vec::sort_by is stable, which the tie rule relies on.
    pool.sort_by(|(a, _), (b, _)| compare_usernames(a, b, term));

    pinned
        .into_iter()
        .chain(pool.into_iter().map(|(_, record)| record))
        .collect()
}

/// Two-key comparator: prefix matches first, then shorter usernames
fn compare_usernames(a: &str, b: &str, term: &str) -> Ordering {
    let a_prefix = a.starts_with(term);
    let b_prefix = b.starts_with(term);
    b_prefix
        .cmp(&a_prefix)
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str) -> RawRecord {
        RawRecord {
            username: Some(username.to_string()),
            ..Default::default()
        }
    }

    fn usernames(records: &[RawRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.username.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_rank_pins_exact_match_first() {
        let records = vec![record("alice_w"), record("alice"), record("xalice")];
        let ranked = rank(&records, &SearchQuery::normalize("alice"));
        assert_eq!(usernames(&ranked), vec!["alice", "alice_w", "xalice"]);
    }

    #[test]
    fn test_rank_exact_match_is_case_insensitive() {
        let records = vec![record("bob"), record("Alice")];
        let ranked = rank(&records, &SearchQuery::normalize("alice"));
        assert_eq!(usernames(&ranked), vec!["Alice", "bob"]);
    }

    #[test]
    fn test_rank_only_first_exact_match_is_pinned() {
        // Duplicate exact matches fold back into the pool.
        let records = vec![
            record("alicette"),
            record("alice"),
            record("alice"),
            record("al"),
        ];
        let ranked = rank(&records, &SearchQuery::normalize("alice"));
        // Pinned first "alice"; the second sorts within the prefix group
        // by length ahead of "alicette"; "al" is not a prefix match.
        assert_eq!(usernames(&ranked), vec!["alice", "alice", "alicette", "al"]);
    }

    #[test]
    fn test_rank_prefix_matches_before_others() {
        let records = vec![record("zz"), record("bobcat"), record("bob_b")];
        let ranked = rank(&records, &SearchQuery::normalize("bob"));
        assert_eq!(usernames(&ranked), vec!["bob_b", "bobcat", "zz"]);
    }

    #[test]
    fn test_rank_shorter_usernames_first_within_group() {
        let records = vec![record("carolina"), record("carol_x"), record("carole")];
        let ranked = rank(&records, &SearchQuery::normalize("carol"));
        assert_eq!(usernames(&ranked), vec!["carole", "carol_x", "carolina"]);
    }

    #[test]
    fn test_rank_ties_preserve_input_order() {
        let records = vec![record("dd_1"), record("dd_2"), record("dd_3")];
        let ranked = rank(&records, &SearchQuery::normalize("dd"));
        assert_eq!(usernames(&ranked), vec!["dd_1", "dd_2", "dd_3"]);
    }

    #[test]
    fn test_rank_missing_username_sorts_as_empty() {
        let records = vec![RawRecord::default(), record("eve")];
        let ranked = rank(&records, &SearchQuery::normalize("eve"));
        assert_eq!(ranked[0].username.as_deref(), Some("eve"));
        assert_eq!(ranked[1].username, None);
    }

    #[test]
    fn test_rank_drops_and_adds_nothing() {
        let records = vec![record("a"), record("b"), record("c"), RawRecord::default()];
        let ranked = rank(&records, &SearchQuery::normalize("zzz"));
        assert_eq!(ranked.len(), records.len());
    }

    #[test]
    fn test_rank_leaves_input_untouched() {
        let records = vec![record("alice_w"), record("alice")];
        let before = records.clone();
        let _ = rank(&records, &SearchQuery::normalize("alice"));
        assert_eq!(records, before);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let records = vec![
            record("frank"),
            record("francesca"),
            record("fran"),
            record("bob"),
            RawRecord::default(),
        ];
        let query = SearchQuery::normalize("fran");
        let once = rank(&records, &query);
        let twice = rank(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rank_no_exact_match() {
        let records = vec![record("gina"), record("ginny")];
        let ranked = rank(&records, &SearchQuery::normalize("gin"));
        assert_eq!(usernames(&ranked), vec!["gina", "ginny"]);
    }

    #[test]
    fn test_rank_empty_dataset() {
        let ranked = rank(&[], &SearchQuery::normalize("alice"));
        assert!(ranked.is_empty());
    }
}
