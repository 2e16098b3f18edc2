use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// A ticketed event. Never deleted; lifecycle flags are mutated only by
/// issuance (`current_supply`), completion (`completed`) and the admin
/// escape hatch (`is_active`).
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Event {
    pub id: u64,
    pub creator_id: AccountId,
    pub name: String,
    pub description: String,
    pub location: String,
    // Nanoseconds; immutable after creation.
    pub event_date: u64,
    pub ticket_price: U128,
    pub max_supply: u32,
    pub current_supply: u32,
    // Frozen at creation: ticket_price * max_resale_bps / 10_000.
    pub max_resale_price: U128,
    pub royalty_bps: u16,
    pub is_active: bool,
    pub completed: bool,
    pub metadata_ref: String,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct EventConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub event_date: u64,
    pub ticket_price: U128,
    pub max_supply: u32,
    pub max_resale_bps: u32,
    pub royalty_bps: u16,
    pub metadata_ref: String,
}
