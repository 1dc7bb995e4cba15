//! 1-based page window over an already filtered and sorted list.
//!
//! The paginator never re-derives `total_items` from the slice it is
//! handed; callers keep `init` in sync whenever the result set size
//! changes, otherwise the current page may point past the end.

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based display bounds; both zero when the list is empty.
    pub start_item: usize,
    pub end_item: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Page size is fixed for the session.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_items: 0,
        }
    }

    /// Reset to page 1 and record the new total.
    pub fn init(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Record a new total without losing the current page; the page is
    /// clamped back into range when the list shrank under it.
    pub fn sync_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total / size)`, floored at 1 even for an empty list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Clamp into `[1, total_pages]` and return the page actually landed on.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages());
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_sub(1).max(1))
    }

    /// The `[(page-1)*size, page*size)` window of the given list.
    #[must_use]
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    #[must_use]
    pub fn info(&self) -> PageInfo {
        let (start_item, end_item) = if self.total_items == 0 {
            (0, 0)
        } else {
            let start = (self.current_page - 1) * self.page_size + 1;
            let end = (self.current_page * self.page_size).min(self.total_items);
            (start, end)
        };
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_items: self.total_items,
            start_item,
            end_item,
            has_prev: self.current_page > 1,
            has_next: self.current_page < self.total_pages(),
        }
    }
}
