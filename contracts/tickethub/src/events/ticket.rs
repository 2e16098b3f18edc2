use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::TICKET;

pub fn emit_ticket_issued(
    buyer_id: &AccountId,
    ticket_id: u64,
    event_id: u64,
    purchase_price: U128,
) {
    EventBuilder::new(TICKET, "ticket_issued", buyer_id)
        .field("ticket_id", ticket_id)
        .field("event_id", event_id)
        .field("purchase_price", purchase_price)
        .emit();
}

pub fn emit_ticket_scanned(creator_id: &AccountId, ticket_id: u64, event_id: u64, owner_id: &AccountId) {
    EventBuilder::new(TICKET, "ticket_scanned", creator_id)
        .field("ticket_id", ticket_id)
        .field("event_id", event_id)
        .field("owner_id", owner_id)
        .emit();
}

pub fn emit_ticket_transformed(
    creator_id: &AccountId,
    ticket_id: u64,
    event_id: u64,
    new_metadata_ref: &str,
) {
    EventBuilder::new(TICKET, "ticket_transformed", creator_id)
        .field("ticket_id", ticket_id)
        .field("event_id", event_id)
        .field("metadata_ref", new_metadata_ref)
        .emit();
}

pub fn emit_ticket_transferred(
    sender_id: &AccountId,
    receiver_id: &AccountId,
    ticket_id: u64,
    memo: &str,
) {
    EventBuilder::new(TICKET, "ticket_transferred", sender_id)
        .field("receiver_id", receiver_id)
        .field("ticket_id", ticket_id)
        .field("memo", memo)
        .emit();
}
