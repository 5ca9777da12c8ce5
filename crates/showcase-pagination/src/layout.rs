//! Page-number strip layout for the gallery navigation control.

use serde::{Deserialize, Serialize};

use crate::window::page_count;

/// Pages on either side of the current page that are always listed.
pub const NAV_RADIUS: u32 = 2;

/// One rendered unit of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEntry {
    #[serde(rename = "page")]
    PageNumber(u32),
    Ellipsis,
}

/// When the navigation control is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only when there is more than one page.
    #[default]
    Auto,
    /// Whenever there is at least one item.
    Always,
}

/// Everything the rendering layer needs to draw the navigation control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControls {
    pub entries: Vec<NavEntry>,
    pub current_page: u32,
    pub page_count: u32,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// Ordered page numbers and ellipses for the strip.
///
/// Page 1, the last page and every page within [`NAV_RADIUS`] of `current_page`
/// are listed; each run of skipped pages collapses into one `Ellipsis`.
pub fn compute_nav_layout(total_items: u32, items_per_page: u32, current_page: u32) -> Vec<NavEntry> {
    let count = page_count(total_items, items_per_page);
    if count == 0 {
        return Vec::new();
    }

    let mut pages = vec![1, count];
    let low = current_page.saturating_sub(NAV_RADIUS).max(1);
    let high = current_page.saturating_add(NAV_RADIUS).min(count);
    pages.extend(low..=high);
    pages.sort_unstable();
    pages.dedup();

    let mut entries = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<u32> = None;
    for page in pages {
        if let Some(prev) = previous {
            if page - prev > 1 {
                entries.push(NavEntry::Ellipsis);
            }
        }
        entries.push(NavEntry::PageNumber(page));
        previous = Some(page);
    }
    entries
}

/// Navigation control for the given state, or `None` when it is not rendered.
pub fn nav_controls(
    total_items: u32,
    items_per_page: u32,
    current_page: u32,
    visibility: Visibility,
) -> Option<NavControls> {
    let count = page_count(total_items, items_per_page);
    if count == 0 {
        return None;
    }
    if count == 1 && visibility == Visibility::Auto {
        return None;
    }

    Some(NavControls {
        entries: compute_nav_layout(total_items, items_per_page, current_page),
        current_page,
        page_count: count,
        previous_disabled: current_page <= 1,
        next_disabled: current_page >= count,
    })
}
