//! Image Showcase — on-chain gallery of content-addressed images with tipping and owner moderation.

use near_sdk::store::Vector;
use near_sdk::{AccountId, BorshStorageKey, PanicOnDefault, env, near};

// --- Modules ---

mod admin;
pub mod constants;
mod errors;
mod events;
mod external;
mod gallery;
mod internal;
pub mod types;
mod views;


pub use constants::*;
pub use errors::ShowcaseError;
pub use types::*;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Images,
    LiveIds,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct ImageShowcase {
    /// From Cargo.toml at init.
    pub version: String,
    pub owner_id: AccountId,
    /// Indexed by image id; removed images stay as cleared slots.
    pub images: Vector<Image>,
    /// Ids of images that have not been removed, ascending.
    pub live_ids: Vector<u64>,
    pub config: GalleryConfig,
}

#[near]
impl ImageShowcase {
    #[init]
    #[handle_result]
    pub fn new(
        owner_id: Option<AccountId>,
        config: Option<GalleryConfig>,
    ) -> Result<Self, ShowcaseError> {
        let config = config.unwrap_or_default();
        config.validate()?;
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id: owner_id.unwrap_or_else(env::predecessor_account_id),
            images: Vector::new(StorageKey::Images),
            live_ids: Vector::new(StorageKey::LiveIds),
            config,
        })
    }
}
