//! Page-count math and the visible item window.

use serde::{Deserialize, Serialize};

/// Half-open index range `[start, end)` of the items shown on one page.
///
/// `end` is not capped at the item count; [`PageWindow::slice`] does that
/// against the real list, which is how the short final page comes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
}

impl PageWindow {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Items of `items` that fall inside the window. Empty when the window starts past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.start as usize).min(items.len());
        let end = (self.end as usize).min(items.len());
        &items[start..end]
    }
}

/// Number of pages needed for `total_items`. Zero when there is nothing to paginate.
pub fn page_count(total_items: u32, items_per_page: u32) -> u32 {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Clamp a one-based page into `[1, page_count]`; page 1 when there are no pages.
pub fn clamp_page(page: u32, page_count: u32) -> u32 {
    page.clamp(1, page_count.max(1))
}

/// Window for `current_page`. Performs no clamping; callers keep the page valid,
/// so the item count does not enter the computation.
pub fn compute_window(_total_items: u32, items_per_page: u32, current_page: u32) -> PageWindow {
    let start = current_page.saturating_sub(1).saturating_mul(items_per_page);
    PageWindow {
        start,
        end: start.saturating_add(items_per_page),
    }
}
