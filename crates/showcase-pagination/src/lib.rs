//! Gallery pagination for Image Showcase.
//! Zero NEAR SDK dependency — usable on-chain (contract views) and off-chain (gallery clients).

mod error;
mod layout;
mod state;
mod view;
mod window;

pub use error::PaginationError;
pub use layout::{NAV_RADIUS, NavControls, NavEntry, Visibility, compute_nav_layout, nav_controls};
pub use state::{Navigation, PageChange, PageState};
pub use view::GalleryView;
pub use window::{PageWindow, clamp_page, compute_window, page_count};
