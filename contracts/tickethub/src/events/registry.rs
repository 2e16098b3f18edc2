use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::EVENT;

pub fn emit_event_created(
    creator_id: &AccountId,
    event_id: u64,
    name: &str,
    event_date: u64,
    ticket_price: U128,
    max_supply: u32,
    max_resale_price: U128,
    royalty_bps: u16,
) {
    EventBuilder::new(EVENT, "event_created", creator_id)
        .field("event_id", event_id)
        .field("name", name)
        .field("event_date", event_date)
        .field("ticket_price", ticket_price)
        .field("max_supply", max_supply)
        .field("max_resale_price", max_resale_price)
        .field("royalty_bps", royalty_bps)
        .emit();
}

pub fn emit_event_completed(creator_id: &AccountId, event_id: u64) {
    EventBuilder::new(EVENT, "event_completed", creator_id)
        .field("event_id", event_id)
        .emit();
}

pub fn emit_event_deactivated(actor_id: &AccountId, event_id: u64) {
    EventBuilder::new(EVENT, "event_deactivated", actor_id)
        .field("event_id", event_id)
        .emit();
}

pub fn emit_event_reactivated(actor_id: &AccountId, event_id: u64) {
    EventBuilder::new(EVENT, "event_reactivated", actor_id)
        .field("event_id", event_id)
        .emit();
}
