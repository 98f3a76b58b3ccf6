use std::num::NonZeroUsize;

use serde::Serialize;

/// One page of a result list. Page indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'r, T> {
    pub items: &'r [T],
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    /// 1-based inclusive range of the items shown, or `None` for an empty page.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page_index - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Slice `results` into the `page_index`-th page (1-based).
///
/// Out-of-range indices are not clamped; they produce a page with no items.
/// Callers only offer targets from [`page_window`].
pub fn paginate<T>(results: &[T], page_index: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let total_items = results.len();

    let items = page_index
        .checked_sub(1)
        .and_then(|i| i.checked_mul(size))
        .and_then(|start| results.get(start..start.saturating_add(size).min(total_items)))
        .unwrap_or(&[]);

    Page {
        items,
        page_index,
        page_size: size,
        total_items,
        total_pages: total_pages(total_items, page_size),
    }
}

/// An entry in the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(usize),
    /// Collapsed run of pages; not clickable.
    Gap,
}

/// Navigation markers: first, last, current and its immediate neighbours,
/// with one [`PageMarker::Gap`] per run of hidden pages.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageMarker> {
    let mut markers = Vec::new();
    let mut last_shown = 0;

    for page in 1..=total_pages {
        let visible = page == 1
            || page == total_pages
            || (page + 1 >= current && page <= current + 1);
        if !visible {
            continue;
        }
        if last_shown != 0 && page > last_shown + 1 {
            markers.push(PageMarker::Gap);
        }
        markers.push(PageMarker::Page(page));
        last_shown = page;
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageMarker::{Gap, Page as P};

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_three_pages() {
        let items: Vec<usize> = (1..=25).collect();

        let first = paginate(&items, 1, size(10));
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items, &items[0..10]);
        assert_eq!(first.item_range(), Some((1, 10)));
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, size(10));
        assert_eq!(last.items, &[21, 22, 23, 24, 25]);
        assert_eq!(last.item_range(), Some((21, 25)));
        assert!(!last.has_next());
    }

    #[test]
    fn test_exact_multiple() {
        let items: Vec<usize> = (1..=20).collect();
        assert_eq!(paginate(&items, 2, size(10)).total_pages, 2);
        assert_eq!(paginate(&items, 2, size(10)).items.len(), 10);
    }

    #[test]
    fn test_empty_results_have_one_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 1, size(10));
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.item_range(), None);
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        let items: Vec<usize> = (1..=25).collect();
        let page = paginate(&items, 4, size(10));
        assert_eq!(page.page_index, 4);
        assert!(page.items.is_empty());
        assert!(paginate(&items, 0, size(10)).items.is_empty());
        assert!(paginate(&items, usize::MAX, size(10)).items.is_empty());
    }

    #[test]
    fn test_window_small() {
        assert_eq!(page_window(1, 1), vec![P(1)]);
        assert_eq!(page_window(2, 3), vec![P(1), P(2), P(3)]);
    }

    #[test]
    fn test_window_gaps() {
        assert_eq!(page_window(1, 10), vec![P(1), P(2), Gap, P(10)]);
        assert_eq!(
            page_window(5, 10),
            vec![P(1), Gap, P(4), P(5), P(6), Gap, P(10)]
        );
        assert_eq!(page_window(10, 10), vec![P(1), Gap, P(9), P(10)]);
    }

    #[test]
    fn test_window_single_hidden_page_collapses() {
        assert_eq!(page_window(4, 7), vec![P(1), Gap, P(3), P(4), P(5), Gap, P(7)]);
    }

    #[test]
    fn test_window_no_gap_when_adjacent() {
        assert_eq!(page_window(3, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
    }
}
