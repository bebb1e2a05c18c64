use serde::{Serialize, Serializer};

/// Pages shown on each side of the current page in the page window.
pub const PAGE_SPREAD: usize = 1;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// One slot of the compressed page-index display: a page number or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(page) => serializer.serialize_u64(*page as u64),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PageState {
    pub fn new(items_per_page: usize, total_items: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items,
        }
    }

    /// Zero items means zero pages; `current_page` still rests at 1 and
    /// `slice` yields nothing.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Clamps silently into `[1, total_pages]` instead of failing.
    pub fn go_to(&mut self, page: usize) {
        let total = self.total_pages();
        self.current_page = if total == 0 { 1 } else { page.clamp(1, total) };
    }

    /// Page boundaries shift, so the current page resets to 1; keeping the
    /// previously visible item in view is not attempted.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.go_to(self.current_page);
    }

    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= records.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(records.len());
        &records[start..end]
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages(), PAGE_SPREAD)
    }
}

/// Compressed page-index sequence: always page 1 first and `total` last,
/// `spread` pages around `current`, a single ellipsis per skipped run.
/// A run of exactly one hidden page renders as its number instead of an
/// ellipsis, so no gap ever hides fewer than two pages.
pub fn page_window(current: usize, total: usize, spread: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total == 1 {
        return vec![PageItem::Page(1)];
    }

    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(spread).max(2);
    let mut end = (current + spread).min(total - 1);

    if start == 3 {
        start = 2;
    }
    if end + 2 == total {
        end = total - 1;
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in start..=end {
        items.push(PageItem::Page(page));
    }
    if end + 1 < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(page) => Some(*page),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn page_count_and_goto_clamp_at_boundaries() {
        let mut state = PageState::new(25, 47);
        assert_eq!(state.total_pages(), 2);

        state.go_to(5);
        assert_eq!(state.current_page, 2);
        state.go_to(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn zero_items_keeps_page_one_and_empty_slice() {
        let mut state = PageState::new(25, 0);
        assert_eq!(state.total_pages(), 0);
        state.go_to(3);
        assert_eq!(state.current_page, 1);
        assert!(state.slice::<u32>(&[]).is_empty());
        assert!(state.page_window().is_empty());
    }

    #[test]
    fn slice_is_the_deterministic_page_window() {
        let records: Vec<u32> = (0..47).collect();
        let mut state = PageState::new(25, records.len());

        assert_eq!(state.slice(&records), &records[0..25]);
        state.go_to(2);
        assert_eq!(state.slice(&records), &records[25..47]);
    }

    #[test]
    fn changing_page_size_resets_to_page_one() {
        let mut state = PageState::new(25, 100);
        state.go_to(3);
        state.set_items_per_page(10);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages(), 10);
    }

    #[test]
    fn page_window_compresses_with_single_ellipses() {
        let window = page_window(5, 10, 1);
        assert_eq!(
            pages(&window),
            vec![
                Some(1),
                None,
                Some(4),
                Some(5),
                Some(6),
                None,
                Some(10)
            ]
        );
    }

    #[test]
    fn page_window_never_hides_a_single_page_behind_an_ellipsis() {
        // current 4: the gap before the range is exactly page 2
        assert_eq!(
            pages(&page_window(4, 10, 1)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
        // current 7: the gap after the range is exactly page 9
        assert_eq!(
            pages(&page_window(7, 10, 1)),
            vec![Some(1), None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn page_window_keeps_first_and_last_page_on_small_totals() {
        assert_eq!(pages(&page_window(1, 1, 1)), vec![Some(1)]);
        assert_eq!(pages(&page_window(2, 2, 1)), vec![Some(1), Some(2)]);
        assert_eq!(
            pages(&page_window(2, 3, 1)),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn page_window_has_no_adjacent_ellipses() {
        for total in 1..30 {
            for current in 1..=total {
                let window = page_window(current, total, 1);
                assert_eq!(window.first(), Some(&PageItem::Page(1)));
                assert_eq!(window.last(), Some(&PageItem::Page(total)));
                for pair in window.windows(2) {
                    assert!(
                        !(pair[0] == PageItem::Ellipsis && pair[1] == PageItem::Ellipsis),
                        "adjacent ellipses for current={current} total={total}"
                    );
                }
            }
        }
    }
}
