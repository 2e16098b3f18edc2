use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// A ticket record. Owned by exactly one account at a time; never destroyed.
/// While escrow-listed on the marketplace the custodial owner is the contract
/// account and the logical seller is tracked in the listing.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Ticket {
    pub id: u64,
    pub event_id: u64,
    pub owner_id: AccountId,
    pub purchase_price: U128,
    // State machine: issued -> scanned -> transformed; both flags irreversible,
    // is_transformed implies is_scanned.
    pub is_scanned: bool,
    pub is_transformed: bool,
    pub purchased_at: u64,
    pub qr_code_hash: String,
    // Display pointer; replaced once at transformation.
    pub metadata_ref: String,
}
