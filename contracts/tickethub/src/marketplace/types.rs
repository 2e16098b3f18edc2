use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// An escrowed marketplace listing. While active, the ticket's custodial
/// owner is the contract account; the logical seller is recorded here.
/// Listings are deactivated on buy/cancel, never deleted.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Listing {
    pub id: u64,
    pub ticket_id: u64,
    pub seller_id: AccountId,
    pub price: U128,
    pub active: bool,
    pub listed_at: u64,
}
