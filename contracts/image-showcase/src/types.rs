use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};
use showcase_pagination::{NavControls, NavEntry};

use crate::constants::*;
use crate::errors::ShowcaseError;

/// One gallery slot. A removed image keeps its id with an empty hash.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub id: u64,
    pub hash: String,
    pub description: String,
    pub tip_amount: U128,
    pub author: AccountId,
    /// Block timestamp in milliseconds.
    pub timestamp: u64,
}

impl Image {
    pub fn is_removed(&self) -> bool {
        self.hash.is_empty()
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub items_per_page: u32,
    pub max_items_per_page: u32,
    pub max_hash_len: u32,
    pub max_description_len: u32,
    pub min_tip: U128,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_items_per_page: DEFAULT_MAX_ITEMS_PER_PAGE,
            max_hash_len: DEFAULT_MAX_HASH_LEN,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
            min_tip: U128(DEFAULT_MIN_TIP),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        if self.items_per_page == 0 || self.max_items_per_page == 0 {
            return Err(ShowcaseError::InvalidInput(
                "Page sizes must be greater than zero".into(),
            ));
        }
        if self.items_per_page > self.max_items_per_page {
            return Err(ShowcaseError::InvalidInput(
                "items_per_page exceeds max_items_per_page".into(),
            ));
        }
        if self.max_hash_len == 0 || self.max_description_len == 0 {
            return Err(ShowcaseError::InvalidInput(
                "Length limits must be greater than zero".into(),
            ));
        }
        if self.min_tip.0 == 0 {
            return Err(ShowcaseError::InvalidInput(
                "min_tip must be at least 1 yoctoNEAR".into(),
            ));
        }
        Ok(())
    }
}

/// Page-number strip entry as returned by `get_gallery_page`.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Page(u32),
    Ellipsis,
}

impl From<NavEntry> for NavItem {
    fn from(entry: NavEntry) -> Self {
        match entry {
            NavEntry::PageNumber(page) => Self::Page(page),
            NavEntry::Ellipsis => Self::Ellipsis,
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryNav {
    pub entries: Vec<NavItem>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl From<NavControls> for GalleryNav {
    fn from(controls: NavControls) -> Self {
        Self {
            entries: controls.entries.into_iter().map(NavItem::from).collect(),
            previous_disabled: controls.previous_disabled,
            next_disabled: controls.next_disabled,
        }
    }
}

/// One page of live images plus the navigation control to render under it.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryPage {
    pub images: Vec<Image>,
    pub current_page: u32,
    pub page_count: u32,
    pub items_per_page: u32,
    pub total_images: u32,
    /// `None` when the control is not rendered.
    pub nav: Option<GalleryNav>,
}
