// Owner and configuration management.

use crate::events::ShowcaseEvent;
use crate::*;

#[near]
impl ImageShowcase {
    pub fn owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }

    pub fn get_config(&self) -> GalleryConfig {
        self.config.clone()
    }

    #[handle_result]
    pub fn set_owner(&mut self, new_owner: AccountId) -> Result<(), ShowcaseError> {
        let caller = env::predecessor_account_id();
        self.assert_owner(&caller)?;
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner.clone());
        ShowcaseEvent::OwnerChanged {
            old_owner,
            new_owner,
        }
        .emit();
        Ok(())
    }

    #[handle_result]
    pub fn update_config(&mut self, config: GalleryConfig) -> Result<(), ShowcaseError> {
        let caller = env::predecessor_account_id();
        self.assert_owner(&caller)?;
        config.validate()?;
        self.config = config.clone();
        ShowcaseEvent::ConfigUpdated {
            owner: caller,
            config,
        }
        .emit();
        Ok(())
    }
}
