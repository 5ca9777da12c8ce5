//! Typed error handling for the image showcase contract.
//!
//! Public methods are `#[handle_result]`; returning `Err(ShowcaseError::Xxx)`
//! makes the SDK call `env::panic_str()` with the Display message.

use near_sdk_macros::NearSchema;
use showcase_pagination::PaginationError;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ShowcaseError {
    /// Caller is not the contract owner.
    Unauthorized(String),
    /// Empty or oversized fields, bad page sizes.
    InvalidInput(String),
    /// No image slot with that id.
    NotFound(String),
    /// The image exists but the operation does not apply to it (removed, own image).
    InvalidState(String),
    /// Attached deposit is missing or below the configured minimum tip.
    InsufficientDeposit(String),
}

impl std::fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
        }
    }
}

impl ShowcaseError {
    pub fn image_not_found(id: u64) -> Self {
        Self::NotFound(format!("Image {} does not exist", id))
    }
    pub fn image_removed(id: u64) -> Self {
        Self::InvalidState(format!("Image {} has been removed", id))
    }
    pub fn only_owner() -> Self {
        Self::Unauthorized("Only the contract owner can perform this action".into())
    }
}

impl From<PaginationError> for ShowcaseError {
    fn from(err: PaginationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
