//! Page slicing over a ranked dataset
//!
//! Slicing never recomputes `total` or `totalPages`; those are derived
//! once from the full snapshot and the fixed page constant.

use crate::error::{Result, ScoutError};
use crate::types::RawRecord;

/// Return the records for one page of the ranked ordering
///
/// # Errors
///
/// Returns [`ScoutError::NoResultsForPage`] when the slice is empty,
/// i.e. the page starts past the end of the dataset.
pub fn slice(ranked: &[RawRecord], page: usize, page_size: usize) -> Result<&[RawRecord]> {
    // Saturating so that even unvalidated page/page_size pairs land on the
    // empty-slice error instead of overflowing.
    let start = (page - 1).saturating_mul(page_size);
    if start >= ranked.len() {
        return Err(ScoutError::no_results_for_page(page));
    }
    let end = start.saturating_add(page_size).min(ranked.len());
    Ok(&ranked[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn records(count: usize) -> Vec<RawRecord> {
        (0..count)
            .map(|i| RawRecord {
                username: Some(format!("user_{i:02}")),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_slice_first_page() {
        let ranked = records(12);
        let page = slice(&ranked, 1, 5).unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].username.as_deref(), Some("user_00"));
    }

    #[test]
    fn test_slice_middle_page() {
        let ranked = records(12);
        let page = slice(&ranked, 2, 5).unwrap();
        assert_eq!(page[0].username.as_deref(), Some("user_05"));
        assert_eq!(page.len(), 5);
    }

    #[test]
    fn test_slice_partial_last_page() {
        let ranked = records(12);
        let page = slice(&ranked, 3, 5).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[1].username.as_deref(), Some("user_11"));
    }

    #[test]
    fn test_slice_past_end_fails() {
        let ranked = records(12);
        let err = slice(&ranked, 4, 5).unwrap_err();
        assert_matches!(err, ScoutError::NoResultsForPage { page: 4 });
    }

    #[test]
    fn test_slice_empty_dataset_fails() {
        let err = slice(&[], 1, 5).unwrap_err();
        assert_matches!(err, ScoutError::NoResultsForPage { page: 1 });
    }

    #[test]
    fn test_slice_huge_page_size_does_not_overflow() {
        let ranked = records(3);
        let page = slice(&ranked, 1, usize::MAX).unwrap();
        assert_eq!(page.len(), 3);

        let err = slice(&ranked, 2, usize::MAX).unwrap_err();
        assert_matches!(err, ScoutError::NoResultsForPage { page: 2 });
    }

    #[test]
    fn test_slice_pages_concatenate_to_prefix() {
        let ranked = records(17);
        let mut collected = Vec::new();
        for page in 1..=3 {
            collected.extend_from_slice(slice(&ranked, page, 5).unwrap());
        }
        assert_eq!(collected.as_slice(), &ranked[..15]);
    }
}
