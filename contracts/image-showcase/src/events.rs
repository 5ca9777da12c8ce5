use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

use crate::types::GalleryConfig;

#[near(event_json(standard = "nep297"))]
pub enum ShowcaseEvent {
    #[event_version("1.0.0")]
    ImageUploaded {
        id: u64,
        hash: String,
        description: String,
        tip_amount: U128,
        author: AccountId,
    },
    #[event_version("1.0.0")]
    ImageTipped {
        id: u64,
        hash: String,
        description: String,
        tip_amount: U128,
        author: AccountId,
        tipper: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    TipRefunded {
        id: u64,
        tipper: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    ImageRemoved { id: u64, author: AccountId },
    #[event_version("1.0.0")]
    OwnerChanged {
        old_owner: AccountId,
        new_owner: AccountId,
    },
    #[event_version("1.0.0")]
    ConfigUpdated {
        owner: AccountId,
        config: GalleryConfig,
    },
}
