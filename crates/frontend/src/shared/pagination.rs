//! Page window over a counted collection.

/// Current page index, page size and total item count for one list.
///
/// Invariants: `size > 0`; `page_count >= 1` so navigation never
/// divides by zero; `slice` never panics on an out-of-range index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub index: usize,
    pub size: usize,
    pub total_count: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            index: 0,
            size: 25,
            total_count: 0,
        }
    }
}

impl PageState {
    pub fn with_size(size: usize) -> Self {
        Self {
            size: size.max(1),
            ..Self::default()
        }
    }

    pub fn page_count(&self) -> usize {
        if self.total_count == 0 {
            1
        } else {
            self.total_count.div_ceil(self.size)
        }
    }

    pub fn offset(&self) -> usize {
        self.index * self.size
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.page_count()
    }

    /// Up to `size` items starting at the page offset. An index past
    /// the end yields an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.size).min(items.len());
        &items[start..end]
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.page_count().saturating_sub(1));
    }

    /// Changing the page size always returns to the first page.
    pub fn set_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.size = size;
        self.index = 0;
    }

    pub fn set_total(&mut self, total: usize) {
        self.total_count = total;
        // Keep the index inside the new range.
        self.index = self.index.min(self.page_count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_at_least_one() {
        let page = PageState::with_size(10);
        assert_eq!(page.page_count(), 1);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn page_count_rounds_up() {
        let mut page = PageState::with_size(10);
        page.set_total(23);
        assert_eq!(page.page_count(), 3);
        page.set_total(30);
        assert_eq!(page.page_count(), 3);
        page.set_total(31);
        assert_eq!(page.page_count(), 4);
    }

    #[test]
    fn slice_never_exceeds_size_or_panics() {
        let items: Vec<i32> = (0..23).collect();
        let mut page = PageState::with_size(10);
        page.set_total(items.len());

        assert_eq!(page.slice(&items), &items[0..10]);

        page.go_to(2);
        assert_eq!(page.slice(&items).len(), 3);

        // Out of range: empty slice, no panic.
        page.index = 99;
        assert!(page.slice(&items).is_empty());
    }

    #[test]
    fn changing_size_resets_to_first_page() {
        let mut page = PageState::with_size(10);
        page.set_total(50);
        page.go_to(3);
        assert_eq!(page.index, 3);
        page.set_size(25);
        assert_eq!(page.index, 0);
        assert_eq!(page.page_count(), 2);
    }

    #[test]
    fn zero_size_is_ignored() {
        let mut page = PageState::with_size(10);
        page.set_size(0);
        assert_eq!(page.size, 10);
    }

    #[test]
    fn go_to_clamps_to_last_page() {
        let mut page = PageState::with_size(10);
        page.set_total(23);
        page.go_to(50);
        assert_eq!(page.index, 2);
    }

    #[test]
    fn shrinking_total_pulls_index_back() {
        let mut page = PageState::with_size(10);
        page.set_total(50);
        page.go_to(4);
        page.set_total(5);
        assert_eq!(page.index, 0);
    }
}
