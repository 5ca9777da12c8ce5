// Upload, tip and moderation entry points.

use crate::external::ext_self;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::{NearToken, Promise};

#[near]
impl ImageShowcase {
    /// Record a content-addressed image for the caller.
    #[handle_result]
    pub fn upload_image(
        &mut self,
        hash: String,
        description: String,
    ) -> Result<Image, ShowcaseError> {
        self.internal_upload(env::predecessor_account_id(), hash, description)
    }

    /// Add the attached deposit to the image's tips and forward it to the author.
    #[payable]
    #[handle_result]
    pub fn tip_image(&mut self, id: u64) -> Result<Promise, ShowcaseError> {
        let tipper = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();
        let image = self.internal_tip(tipper.clone(), id, amount)?;
        Ok(Promise::new(image.author)
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(TIP_CALLBACK_GAS)
                    .on_tip_transferred(id, tipper, U128(amount)),
            ))
    }

    /// Resolve a tip transfer. A failed transfer lands back on this account, so the
    /// tip is taken off the image and returned to the tipper. Only callable by this contract.
    #[private]
    pub fn on_tip_transferred(&mut self, id: u64, tipper: AccountId, amount: U128) -> bool {
        if env::promise_result_checked(0, 0).is_ok() {
            return true;
        }
        self.internal_revert_tip(id, tipper.clone(), amount.0);
        let _ = Promise::new(tipper).transfer(NearToken::from_yoctonear(amount.0));
        false
    }

    /// Owner-only moderation; the id stays allocated as an empty slot.
    #[handle_result]
    pub fn remove_image(&mut self, id: u64) -> Result<(), ShowcaseError> {
        self.internal_remove(&env::predecessor_account_id(), id)
            .map(|_| ())
    }
}
