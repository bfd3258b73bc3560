//! Pagination and the compressed page-index strip.
//!
//! The strip always shows the first five pages, the last three, and the
//! current page with its neighbours. Gaps collapse into `..`:
//!
//! ```text
//! current 10 of 20:  1 2 3 4 5 .. 9 10 11 .. 18 19 20
//! ```

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Leading pages always shown
const HEAD_PAGES: usize = 5;

/// Trailing pages always shown
const TAIL_PAGES: usize = 3;

/// One slot of the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Page(n) => write!(f, "{}", n),
            PageEntry::Ellipsis => f.write_str(".."),
        }
    }
}

impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(n) => serializer.serialize_u64(*n as u64),
            PageEntry::Ellipsis => serializer.serialize_str(".."),
        }
    }
}

/// Number of full pages: `total_matches / page_size`
///
/// A trailing partial page is not counted, but [`page_slice`] still serves it.
pub fn total_pages(total_matches: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_matches / page_size
}

/// Items of a 1-based page; out-of-range pages give an empty slice
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Build the page strip for `current` out of `total_pages`
pub fn page_index(current: usize, total_pages: usize) -> Vec<PageEntry> {
    let mut pages: BTreeSet<usize> = BTreeSet::new();

    pages.insert(1);
    pages.extend(2..=total_pages.min(HEAD_PAGES));
    pages.extend((total_pages.saturating_sub(TAIL_PAGES - 1)..=total_pages).filter(|&p| p > 0));
    if current > 0 {
        pages.insert(current);
    }
    if current > 1 {
        pages.insert(current - 1);
    }
    if pages.last().is_some_and(|&last| current < last) {
        pages.insert(current + 1);
    }

    let mut strip = Vec::with_capacity(pages.len() * 2);
    let mut previous = 0;
    for page in pages {
        if page != previous + 1 {
            strip.push(PageEntry::Ellipsis);
        }
        strip.push(PageEntry::Page(page));
        previous = page;
    }
    strip
}
