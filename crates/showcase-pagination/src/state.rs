//! Session-scoped current-page state and its navigation transitions.

use crate::error::PaginationError;
use crate::layout::{NavControls, NavEntry, Visibility, compute_nav_layout, nav_controls};
use crate::window::{PageWindow, clamp_page, compute_window, page_count};

/// Click events coming from the navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Page(u32),
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// Same page requested; nothing to redraw.
    Unchanged,
    /// The page moved; the renderer refreshes the window and scrolls to the top.
    Moved { from: u32, to: u32 },
}

impl PageChange {
    pub fn scroll_to_top(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    items_per_page: u32,
    total_items: u32,
}

impl PageState {
    pub fn new(items_per_page: u32) -> Result<Self, PaginationError> {
        if items_per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            current_page: 1,
            items_per_page,
            total_items: 0,
        })
    }

    pub fn with_total_items(mut self, total_items: u32) -> Self {
        self.set_total_items(total_items);
        self
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total_items, self.items_per_page)
    }

    /// Record a new item count, pulling the current page back to the last page if it fell off the end.
    pub fn set_total_items(&mut self, total_items: u32) -> PageChange {
        self.total_items = total_items;
        let count = self.page_count();
        if count > 0 && self.current_page > count {
            let from = self.current_page;
            self.current_page = count;
            return PageChange::Moved { from, to: count };
        }
        PageChange::Unchanged
    }

    pub fn window(&self) -> PageWindow {
        compute_window(self.total_items, self.items_per_page, self.current_page)
    }

    pub fn nav_layout(&self) -> Vec<NavEntry> {
        compute_nav_layout(self.total_items, self.items_per_page, self.current_page)
    }

    pub fn controls(&self, visibility: Visibility) -> Option<NavControls> {
        nav_controls(
            self.total_items,
            self.items_per_page,
            self.current_page,
            visibility,
        )
    }

    /// Move to `requested`, kept within `[1, page_count]`.
    pub fn change_page(&mut self, requested: u32) -> PageChange {
        let target = clamp_page(requested, self.page_count());
        if target == self.current_page {
            return PageChange::Unchanged;
        }
        let from = self.current_page;
        self.current_page = target;
        PageChange::Moved { from, to: target }
    }

    pub fn navigate(&mut self, navigation: Navigation) -> PageChange {
        let requested = match navigation {
            Navigation::Previous => self.current_page.saturating_sub(1),
            Navigation::Next => self.current_page.saturating_add(1),
            Navigation::Page(page) => page,
        };
        self.change_page(requested)
    }
}
