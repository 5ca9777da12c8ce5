//! Gallery-wide defaults and limits.

use near_sdk::{Gas, NearToken};

/// Images per gallery page when the caller does not ask for a size.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 5;

/// Upper bound a caller may request per page; keeps view gas bounded.
pub const DEFAULT_MAX_ITEMS_PER_PAGE: u32 = 50;

/// Content hash length cap (CIDv1 base32 strings are ~59 chars).
pub const DEFAULT_MAX_HASH_LEN: u32 = 128;

pub const DEFAULT_MAX_DESCRIPTION_LEN: u32 = 1_024;

/// Smallest tip accepted by `tip_image` (1 yoctoNEAR).
pub const DEFAULT_MIN_TIP: u128 = 1;

pub const NO_DEPOSIT: NearToken = NearToken::from_yoctonear(0);

/// Gas reserved for `on_tip_transferred`.
pub const TIP_CALLBACK_GAS: Gas = Gas::from_tgas(10);
