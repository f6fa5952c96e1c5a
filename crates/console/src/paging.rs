//! Pager arithmetic for list views.

use warden_core::{DEFAULT_PAGE_SIZE, PageRequest};

/// Current position within a paginated listing.
///
/// `total` comes from the last fetched page envelope; the pager clamps the
/// page number whenever the total shrinks under it (a deletion on the last
/// page, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Record a fresh total and clamp the page number into range.
    pub fn saw_total(&mut self, total: u64) {
        self.total = total;
        self.page = self.page.min(self.total_pages());
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Label shown between the prev/next buttons.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_is_one_page() {
        let pager = Pager::new();
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
        assert_eq!(pager.label(), "Page 1 of 1");
    }

    #[test]
    fn total_pages_rounds_up() {
        let mut pager = Pager::new();
        pager.saw_total(41);
        assert_eq!(pager.total_pages(), 3);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut pager = Pager::new();
        pager.saw_total(41);

        pager.prev();
        assert_eq!(pager.page, 1);

        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.page, 3);
        assert!(!pager.has_next());
    }

    #[test]
    fn shrinking_total_pulls_the_page_back() {
        let mut pager = Pager::new();
        pager.saw_total(60);
        pager.next();
        pager.next();
        assert_eq!(pager.page, 3);

        // The only row on page 3 was deleted.
        pager.saw_total(40);
        assert_eq!(pager.page, 2);
    }

    #[test]
    fn request_carries_page_and_size() {
        let mut pager = Pager::new();
        pager.saw_total(100);
        pager.next();
        let req = pager.request();
        assert_eq!(req.page, 2);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
    }
}
