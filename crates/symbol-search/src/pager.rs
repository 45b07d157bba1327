//! Result pager.
//!
//! Owns the complete result list of one search and hands it out front to back
//! in pages of a fixed size. The list is consumed at most once: a drawn page is
//! never drawn again and the unconsumed tail only ever shrinks until the next
//! [`ResultPager::load`] or [`ResultPager::clear`].

use crate::models::{ResultItem, ResultSet};
use std::num::NonZeroUsize;
use std::ops::Range;
use tracing::{debug, warn};

pub const PAGE_SIZE: usize = 100;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(PAGE_SIZE).unwrap();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum PagerState {
    /// Nothing loaded, or the loaded results are used up
    #[default]
    Empty,
    /// Items remain after the current page
    HasMore,
    /// The current page holds the final items
    LastPageDrawn,
}

impl PagerState {
    pub fn has_more(self) -> bool {
        matches!(self, Self::HasMore)
    }
}

/// The items of one draw together with the pager state it left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: &'a [ResultItem],
    /// 1-based page number, 0 when the page is empty
    pub number: usize,
    /// Position of the first item within the whole result set
    pub offset: usize,
    pub state: PagerState,
}

impl Page<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }
}

#[derive(Debug)]
pub struct ResultPager {
    results: Vec<ResultItem>,
    page_size: NonZeroUsize,
    /// Number of items already drawn
    cursor: usize,
    current: Range<usize>,
    pages_drawn: usize,
    state: PagerState,
}

impl Default for ResultPager {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ResultPager {
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            results: Vec::new(),
            page_size,
            cursor: 0,
            current: 0..0,
            pages_drawn: 0,
            state: PagerState::Empty,
        }
    }

    /// Replace whatever was loaded before and draw the first page.
    pub fn load(&mut self, results: ResultSet) -> Page<'_> {
        self.results = results.into_items();
        self.cursor = 0;
        self.current = 0..0;
        self.pages_drawn = 0;
        debug!(total = self.results.len(), "loaded result set");
        self.draw()
    }

    /// Draw the next page.
    ///
    /// Only meaningful while [`PagerState::HasMore`]. Otherwise the tail is
    /// already empty, so the draw yields an empty page and leaves the pager
    /// [`PagerState::Empty`].
    pub fn next_page(&mut self) -> Page<'_> {
        if !self.state.has_more() {
            warn!(state = %self.state, "next page requested with no more results");
        }
        self.draw()
    }

    pub fn clear(&mut self) {
        self.results = Vec::new();
        self.cursor = 0;
        self.current = 0..0;
        self.pages_drawn = 0;
        self.state = PagerState::Empty;
    }

    /// The most recent draw.
    pub fn page(&self) -> Page<'_> {
        Page {
            items: &self.results[self.current.clone()],
            number: if self.current.is_empty() { 0 } else { self.pages_drawn },
            offset: self.current.start,
            state: self.state,
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Size of the loaded result set, drawn or not
    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    pub fn remaining(&self) -> usize {
        self.results.len() - self.cursor
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn pages_drawn(&self) -> usize {
        self.pages_drawn
    }

    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(self.page_size.get())
    }

    fn draw(&mut self) -> Page<'_> {
        let start = self.cursor;
        let end = (start + self.page_size.get()).min(self.results.len());

        self.current = start..end;
        self.cursor = end;
        self.state = if start == end {
            PagerState::Empty
        } else if end < self.results.len() {
            PagerState::HasMore
        } else {
            PagerState::LastPageDrawn
        };
        if start < end {
            self.pages_drawn += 1;
        }

        debug!(
            page = self.pages_drawn,
            len = end - start,
            remaining = self.remaining(),
            state = %self.state,
            "drew page"
        );
        self.page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn result_set(len: usize) -> ResultSet {
        (0..len)
            .map(|i| ResultItem::new(format!("{i:08}"), format!("symbol {i}")))
            .collect()
    }

    #[test]
    fn test_pages_over_250_results() {
        let mut pager = ResultPager::default();

        let page = pager.load(result_set(250));
        assert_eq!(page.len(), 100);
        assert_eq!(page.state, PagerState::HasMore);
        assert_eq!(page.number, 1);

        let page = pager.next_page();
        assert_eq!(page.len(), 100);
        assert_eq!(page.state, PagerState::HasMore);
        assert_eq!(page.offset, 100);

        let page = pager.next_page();
        assert_eq!(page.len(), 50);
        assert_eq!(page.state, PagerState::LastPageDrawn);
        assert_eq!(page.number, 3);

        for _ in 0..2 {
            let page = pager.next_page();
            assert!(page.is_empty());
            assert_eq!(page.state, PagerState::Empty);
            assert_eq!(page.number, 0);
        }
        assert_eq!(pager.remaining(), 0);
        assert_eq!(pager.total_count(), 250);
    }

    #[test]
    fn test_load_empty_result_set() {
        let mut pager = ResultPager::default();
        let page = pager.load(ResultSet::default());

        assert!(page.is_empty());
        assert_eq!(page.state, PagerState::Empty);
        assert_eq!(pager.pages_drawn(), 0);
    }

    #[test]
    fn test_exact_page_is_last_page() {
        let mut pager = ResultPager::default();
        let page = pager.load(result_set(100));

        assert_eq!(page.len(), 100);
        assert_eq!(page.state, PagerState::LastPageDrawn);
        assert!(!pager.has_more());
    }

    #[rstest]
    #[case(0, PagerState::Empty)]
    #[case(1, PagerState::LastPageDrawn)]
    #[case(99, PagerState::LastPageDrawn)]
    #[case(100, PagerState::LastPageDrawn)]
    #[case(101, PagerState::HasMore)]
    #[case(1000, PagerState::HasMore)]
    fn test_state_after_load(#[case] len: usize, #[case] expected: PagerState) {
        let mut pager = ResultPager::default();
        let page = pager.load(result_set(len));
        assert_eq!(page.len(), len.min(PAGE_SIZE));
        assert_eq!(page.state, expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(250, 0)]
    #[case(250, 1)]
    #[case(250, 2)]
    #[case(250, 3)]
    fn test_clear_from_any_state(#[case] len: usize, #[case] advances: usize) {
        let mut pager = ResultPager::default();
        pager.load(result_set(len));
        for _ in 0..advances {
            pager.next_page();
        }

        pager.clear();
        assert_eq!(pager.state(), PagerState::Empty);
        assert!(pager.page().is_empty());
        assert_eq!(pager.total_count(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(100)]
    #[case(199)]
    #[case(200)]
    #[case(1234)]
    fn test_pages_cover_results_in_order(#[case] len: usize) {
        let expected = result_set(len);
        let mut pager = ResultPager::default();

        let mut seen: Vec<ResultItem> = pager.load(expected.clone()).items.to_vec();
        let mut remaining = pager.remaining();
        while pager.state() != PagerState::Empty {
            let page = pager.next_page();
            assert!(page.len() <= PAGE_SIZE);
            seen.extend_from_slice(page.items);

            assert!(pager.remaining() <= remaining);
            remaining = pager.remaining();
        }

        assert_eq!(seen, expected.into_items());
    }

    #[test]
    fn test_next_page_without_results() {
        let mut pager = ResultPager::default();
        let page = pager.next_page();
        assert!(page.is_empty());
        assert_eq!(page.state, PagerState::Empty);
        assert_eq!(pager.consumed(), 0);
    }

    #[test]
    fn test_load_replaces_unconsumed_tail() {
        let mut pager = ResultPager::default();
        pager.load(result_set(300));
        pager.next_page();

        let page = pager.load(result_set(20));
        assert_eq!(page.len(), 20);
        assert_eq!(page.offset, 0);
        assert_eq!(page.number, 1);
        assert_eq!(pager.remaining(), 0);
        assert_eq!(pager.total_count(), 20);
    }

    #[test]
    fn test_custom_page_size() {
        let mut pager = ResultPager::with_page_size(NonZeroUsize::new(10).unwrap());
        let page = pager.load(result_set(25));
        assert_eq!(page.len(), 10);
        assert_eq!(pager.page_count(), 3);

        pager.next_page();
        let page = pager.next_page();
        assert_eq!(page.len(), 5);
        assert_eq!(page.offset, 20);
        assert_eq!(page.state, PagerState::LastPageDrawn);
    }

    #[test]
    fn test_page_reflects_latest_draw() {
        let mut pager = ResultPager::default();
        pager.load(result_set(150));
        pager.next_page();

        let page = pager.page();
        assert_eq!(page.len(), 50);
        assert_eq!(page.items[0].key, "00000100");
        assert_eq!(page.state, PagerState::LastPageDrawn);
    }
}
