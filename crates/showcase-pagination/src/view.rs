//! State container the top-level gallery view owns.

use crate::error::PaginationError;
use crate::layout::{NavControls, Visibility};
use crate::state::{Navigation, PageChange, PageState};

/// Ordered gallery items plus the page being shown.
///
/// Child views get `visible()` and `controls()` read-only and send clicks back
/// through `handle()`; every change to the item list reapplies the clamp rule.
#[derive(Debug, Clone)]
pub struct GalleryView<T> {
    items: Vec<T>,
    page: PageState,
}

impl<T> GalleryView<T> {
    pub fn new(items_per_page: u32) -> Result<Self, PaginationError> {
        Ok(Self {
            items: Vec::new(),
            page: PageState::new(items_per_page)?,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Replace the list after a data load.
    pub fn replace_items(&mut self, items: Vec<T>) -> PageChange {
        self.items = items;
        self.sync_total()
    }

    pub fn push(&mut self, item: T) -> PageChange {
        self.items.push(item);
        self.sync_total()
    }

    /// Drop every item matching `predicate`; returns how many were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> (usize, PageChange)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = before - self.items.len();
        (removed, self.sync_total())
    }

    pub fn visible(&self) -> &[T] {
        self.page.window().slice(&self.items)
    }

    pub fn controls(&self, visibility: Visibility) -> Option<NavControls> {
        self.page.controls(visibility)
    }

    pub fn handle(&mut self, navigation: Navigation) -> PageChange {
        self.page.navigate(navigation)
    }

    fn sync_total(&mut self) -> PageChange {
        let total = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        self.page.set_total_items(total)
    }
}
