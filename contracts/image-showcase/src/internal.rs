use std::cmp::Ordering;

use near_sdk::json_types::U128;
use near_sdk::{AccountId, env, log};

use crate::errors::ShowcaseError;
use crate::events::ShowcaseEvent;
use crate::*;

impl ImageShowcase {
    pub(crate) fn assert_owner(&self, caller: &AccountId) -> Result<(), ShowcaseError> {
        if caller != &self.owner_id {
            return Err(ShowcaseError::only_owner());
        }
        Ok(())
    }

    pub(crate) fn slot_index(&self, id: u64) -> Result<u32, ShowcaseError> {
        u32::try_from(id)
            .ok()
            .filter(|index| *index < self.images.len())
            .ok_or_else(|| ShowcaseError::image_not_found(id))
    }

    pub(crate) fn live_image(&self, id: u64) -> Result<&Image, ShowcaseError> {
        let index = self.slot_index(id)?;
        let image = self
            .images
            .get(index)
            .ok_or_else(|| ShowcaseError::image_not_found(id))?;
        if image.is_removed() {
            return Err(ShowcaseError::image_removed(id));
        }
        Ok(image)
    }

    fn validate_field(name: &str, value: &str, max_len: u32) -> Result<(), ShowcaseError> {
        if value.trim().is_empty() {
            return Err(ShowcaseError::InvalidInput(format!("{} cannot be empty", name)));
        }
        if value.len() > max_len as usize {
            return Err(ShowcaseError::InvalidInput(format!(
                "{} exceeds {} bytes",
                name, max_len
            )));
        }
        Ok(())
    }

    pub(crate) fn internal_upload(
        &mut self,
        author: AccountId,
        hash: String,
        description: String,
    ) -> Result<Image, ShowcaseError> {
        Self::validate_field("Image hash", &hash, self.config.max_hash_len)?;
        Self::validate_field("Description", &description, self.config.max_description_len)?;

        let image = Image {
            id: u64::from(self.images.len()),
            hash,
            description,
            tip_amount: U128(0),
            author,
            timestamp: env::block_timestamp_ms(),
        };
        self.images.push(image.clone());
        self.live_ids.push(image.id);

        log!("Image {} uploaded by {}", image.id, image.author);
        ShowcaseEvent::ImageUploaded {
            id: image.id,
            hash: image.hash.clone(),
            description: image.description.clone(),
            tip_amount: image.tip_amount,
            author: image.author.clone(),
        }
        .emit();

        Ok(image)
    }

    /// Credit `amount` to the image; the caller moves the funds to the returned author.
    pub(crate) fn internal_tip(
        &mut self,
        tipper: AccountId,
        id: u64,
        amount: u128,
    ) -> Result<Image, ShowcaseError> {
        let image = self.live_image(id)?;
        if image.author == tipper {
            return Err(ShowcaseError::InvalidState(
                "You cannot tip your own image".into(),
            ));
        }
        if amount == NO_DEPOSIT.as_yoctonear() || amount < self.config.min_tip.0 {
            return Err(ShowcaseError::InsufficientDeposit(format!(
                "Attach at least {} yoctoNEAR to tip",
                self.config.min_tip.0
            )));
        }
        let total = image.tip_amount.0.checked_add(amount).ok_or_else(|| {
            ShowcaseError::InvalidState(format!("Tip total overflow on image {}", id))
        })?;

        let index = self.slot_index(id)?;
        let image = self
            .images
            .get_mut(index)
            .ok_or_else(|| ShowcaseError::image_not_found(id))?;
        image.tip_amount = U128(total);
        let image = image.clone();

        log!("Image {} tipped {} yoctoNEAR by {}", id, amount, tipper);
        ShowcaseEvent::ImageTipped {
            id,
            hash: image.hash.clone(),
            description: image.description.clone(),
            tip_amount: image.tip_amount,
            author: image.author.clone(),
            tipper,
            amount: U128(amount),
        }
        .emit();

        Ok(image)
    }

    /// Clear the slot; returns the image as it was before removal.
    pub(crate) fn internal_remove(
        &mut self,
        caller: &AccountId,
        id: u64,
    ) -> Result<Image, ShowcaseError> {
        self.assert_owner(caller)?;
        let removed = self.live_image(id)?.clone();

        let index = self.slot_index(id)?;
        self.images.replace(
            index,
            Image {
                id,
                hash: String::new(),
                description: String::new(),
                tip_amount: U128(0),
                author: env::current_account_id(),
                timestamp: 0,
            },
        );
        self.unlist(id)?;

        log!("Image {} removed by {}", id, caller);
        ShowcaseEvent::ImageRemoved {
            id,
            author: removed.author.clone(),
        }
        .emit();

        Ok(removed)
    }

    /// Position of `id` in `live_ids`; binary search since ids are appended in order.
    pub(crate) fn live_position(&self, id: u64) -> Option<u32> {
        let (mut low, mut high) = (0, self.live_ids.len());
        while low < high {
            let mid = low + (high - low) / 2;
            match self.live_ids.get(mid)?.cmp(&id) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    /// Drop `id` from the live index, shifting later ids down to keep upload order.
    fn unlist(&mut self, id: u64) -> Result<(), ShowcaseError> {
        let position = self.live_position(id).ok_or_else(|| {
            ShowcaseError::InvalidState(format!("Image {} missing from live index", id))
        })?;
        let last = self.live_ids.len() - 1;
        for index in position..last {
            if let Some(&next) = self.live_ids.get(index + 1) {
                self.live_ids.replace(index, next);
            }
        }
        self.live_ids.pop();
        Ok(())
    }

    /// Undo a tip whose transfer to the author failed. The slot may have been
    /// removed in the meantime; then only the refund happens.
    pub(crate) fn internal_revert_tip(&mut self, id: u64, tipper: AccountId, amount: u128) {
        if let Some(image) = self
            .slot_index(id)
            .ok()
            .and_then(|index| self.images.get_mut(index))
            .filter(|image| !image.is_removed())
        {
            image.tip_amount = U128(image.tip_amount.0.saturating_sub(amount));
        }

        log!("Tip of {} yoctoNEAR on image {} refunded to {}", amount, id, tipper);
        ShowcaseEvent::TipRefunded {
            id,
            tipper,
            amount: U128(amount),
        }
        .emit();
    }
}
