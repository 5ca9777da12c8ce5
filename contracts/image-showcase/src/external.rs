// Self callback interface
//
// `#[ext_contract]` generates helper structs that the compiler flags as dead_code
// even though they are used at runtime for cross-contract calls.
#![allow(dead_code)]

use near_sdk::json_types::U128;
use near_sdk::{AccountId, ext_contract};

#[ext_contract(ext_self)]
pub trait ExtSelf {
    /// Resolve the transfer of a tip to the image author.
    fn on_tip_transferred(&mut self, id: u64, tipper: AccountId, amount: U128) -> bool;
}
