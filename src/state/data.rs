//! Data state for the ParsePoint TUI.
//!
//! [`SummaryStore`] holds the last successful response and the views derived
//! from it: the volume-sorted summary, its pages and random chart samples.
//!
//! # Design
//!
//! The data state is separate from navigation state, allowing the data
//! to be replaced independently of what's currently selected or visible.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::charts::by_volume_desc;
use crate::domain::{OverallTotals, StatementRow, SummaryItem, SummaryResponse};

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

// ============================================================================
// Summary Store
// ============================================================================

/// Summary data returned by the last successful upload.
///
/// The sorted view is computed once on [`load`](Self::load), so repeated
/// calls to [`sorted`](Self::sorted) always return the same order.
#[derive(Debug, Default)]
pub struct SummaryStore {
    response: Option<SummaryResponse>,
    sorted: Vec<SummaryItem>,
}

impl SummaryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored data with a fresh response.
    pub fn load(&mut self, response: SummaryResponse) {
        let mut sorted = response.summary.clone();
        // sort_by is stable: ties keep response order.
        sorted.sort_by(by_volume_desc);
        self.sorted = sorted;
        self.response = Some(response);
    }

    /// Drops all data and derived views.
    pub fn clear(&mut self) {
        self.response = None;
        self.sorted.clear();
    }

    /// Returns `true` once a response has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.response.is_some()
    }

    /// Summary items ordered by gross volume, highest first.
    #[must_use]
    pub fn sorted(&self) -> &[SummaryItem] {
        &self.sorted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Returns the item at `index` in sorted order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SummaryItem> {
        self.sorted.get(index)
    }

    /// Number of pages, `ceil(len / PAGE_SIZE)`.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.sorted.len().div_ceil(PAGE_SIZE)
    }

    /// Returns the items on a 1-based page.
    ///
    /// # Returns
    ///
    /// `None` when `page` is outside `1..=page_count()`.
    #[must_use]
    pub fn page(&self, page: usize) -> Option<&[SummaryItem]> {
        if page == 0 || page > self.page_count() {
            return None;
        }
        let start = (page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.sorted.len());
        Some(&self.sorted[start..end])
    }

    /// Draws `min(k, len)` distinct items uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Vec<SummaryItem> {
        self.sorted.choose_multiple(rng, k).cloned().collect()
    }

    /// Server-provided totals, shown verbatim.
    #[must_use]
    pub fn totals(&self) -> Option<OverallTotals> {
        self.response.as_ref().and_then(|r| r.totals)
    }

    /// Statement rows from the transactions schema; empty otherwise.
    #[must_use]
    pub fn statement_rows(&self) -> &[StatementRow] {
        self.response
            .as_ref()
            .map_or(&[], |r| r.statement_rows.as_slice())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ResponseMother, SummaryItemMother};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::*;
    use std::collections::HashSet;

    fn store_with(n: usize) -> SummaryStore {
        let mut store = SummaryStore::new();
        store.load(ResponseMother::with_items(SummaryItemMother::many(n)));
        store
    }

    #[test]
    fn test_empty_store() {
        let store = SummaryStore::new();
        assert!(!store.is_loaded());
        assert!(store.is_empty());
        assert_eq!(store.page_count(), 0);
        assert!(store.page(1).is_none());
        assert!(store.totals().is_none());
    }

    #[test]
    fn test_sorted_descending_by_volume() {
        let mut store = SummaryStore::new();
        store.load(ResponseMother::with_items(vec![
            SummaryItem::new("small", 1.0, 1.0),
            SummaryItem::new("big", 100.0, 0.0),
            SummaryItem::new("mid", 10.0, 5.0),
        ]));

        let ids: Vec<&str> = store.sorted().iter().map(|i| i.identifier.as_str()).collect();
        assert_eq!(ids, vec!["big", "mid", "small"]);
    }

    #[test]
    fn test_sorted_is_stable_for_ties() {
        let mut store = SummaryStore::new();
        store.load(ResponseMother::with_items(vec![
            SummaryItem::new("first", 5.0, 5.0),
            SummaryItem::new("second", 10.0, 0.0),
            SummaryItem::new("third", 0.0, 10.0),
        ]));

        let ids: Vec<&str> = store.sorted().iter().map(|i| i.identifier.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sorted_is_idempotent() {
        let store = store_with(23);
        let first = store.sorted().to_vec();
        assert_eq!(store.sorted(), first.as_slice());
    }

    #[rstest]
    #[case::empty(0, 0)]
    #[case::one(1, 1)]
    #[case::exact(10, 1)]
    #[case::just_over(11, 2)]
    #[case::several(35, 4)]
    fn test_page_count(#[case] len: usize, #[case] expected: usize) {
        assert_eq!(store_with(len).page_count(), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(9)]
    #[case(10)]
    #[case(21)]
    #[case(100)]
    fn test_pages_partition_sorted(#[case] len: usize) {
        let store = store_with(len);
        let mut total = 0;
        let mut rejoined = Vec::new();
        for page in 1..=store.page_count() {
            let items = store.page(page).unwrap();
            assert!(items.len() <= PAGE_SIZE);
            total += items.len();
            rejoined.extend_from_slice(items);
        }
        assert_eq!(total, store.sorted().len());
        assert_eq!(rejoined, store.sorted());
    }

    #[test]
    fn test_page_out_of_range() {
        let store = store_with(15);
        assert!(store.page(0).is_none());
        assert!(store.page(3).is_none());
        assert_eq!(store.page(2).map(<[SummaryItem]>::len), Some(5));
    }

    #[rstest]
    #[case::fewer_than_k(3, 20, 3)]
    #[case::more_than_k(50, 20, 20)]
    #[case::zero(10, 0, 0)]
    fn test_sample_size(#[case] len: usize, #[case] k: usize, #[case] expected: usize) {
        let store = store_with(len);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(store.sample(k, &mut rng).len(), expected);
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let store = store_with(40);
        let mut rng = StdRng::seed_from_u64(1);
        let sample = store.sample(20, &mut rng);
        let ids: HashSet<&str> = sample.iter().map(|i| i.identifier.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_sample_is_deterministic_for_seed() {
        let store = store_with(40);
        let a = store.sample(20, &mut StdRng::seed_from_u64(42));
        let b = store.sample(20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_totals_pass_through() {
        let mut store = SummaryStore::new();
        store.load(ResponseMother::single());
        let totals = store.totals().unwrap();
        assert_eq!(totals.total_debited, 100.0);
        assert_eq!(totals.total_credited, 50.0);
    }

    #[test]
    fn test_clear() {
        let mut store = store_with(5);
        store.clear();
        assert!(!store.is_loaded());
        assert!(store.sorted().is_empty());
        assert!(store.statement_rows().is_empty());
    }

    #[test]
    fn test_load_replaces_previous() {
        let mut store = store_with(30);
        store.load(ResponseMother::single());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().identifier, "a@x");
    }
}
