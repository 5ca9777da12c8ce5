// Read-only gallery queries.

use crate::*;
use showcase_pagination::{PageState, Visibility};

#[near]
impl ImageShowcase {
    /// Number of slots ever allocated, removed images included.
    pub fn image_count(&self) -> u64 {
        u64::from(self.images.len())
    }

    pub fn live_image_count(&self) -> u32 {
        self.live_ids.len()
    }

    /// Raw slot lookup; a removed image comes back with an empty hash.
    pub fn images(&self, id: u64) -> Option<Image> {
        let index = self.slot_index(id).ok()?;
        self.images.get(index).cloned()
    }

    /// Live image by id; `None` for unknown or removed ids.
    pub fn get_image(&self, id: u64) -> Option<Image> {
        self.live_image(id).ok().cloned()
    }

    /// One page of live images in upload order.
    ///
    /// `page` defaults to 1 and is clamped to the last page; `items_per_page`
    /// defaults to the configured size. With `always_show_nav` the control is
    /// returned even for a single page (never for an empty gallery).
    #[handle_result]
    pub fn get_gallery_page(
        &self,
        page: Option<u32>,
        items_per_page: Option<u32>,
        always_show_nav: Option<bool>,
    ) -> Result<GalleryPage, ShowcaseError> {
        let items_per_page = items_per_page.unwrap_or(self.config.items_per_page);
        if items_per_page > self.config.max_items_per_page {
            return Err(ShowcaseError::InvalidInput(format!(
                "items_per_page cannot exceed {}",
                self.config.max_items_per_page
            )));
        }

        let mut state = PageState::new(items_per_page)?.with_total_items(self.live_ids.len());
        state.change_page(page.unwrap_or(1));
        let window = state.window();

        let images = self
            .live_ids
            .iter()
            .skip(window.start as usize)
            .take(window.len() as usize)
            .filter_map(|id| self.live_image(*id).ok())
            .cloned()
            .collect();

        let visibility = if always_show_nav.unwrap_or(false) {
            Visibility::Always
        } else {
            Visibility::Auto
        };

        Ok(GalleryPage {
            images,
            current_page: state.current_page(),
            page_count: state.page_count(),
            items_per_page,
            total_images: state.total_items(),
            nav: state.controls(visibility).map(GalleryNav::from),
        })
    }
}
