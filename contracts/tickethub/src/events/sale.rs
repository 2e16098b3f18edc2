use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::SALE;

pub fn emit_resale_approved(seller_id: &AccountId, ticket_id: u64, price: U128) {
    EventBuilder::new(SALE, "resale_approved", seller_id)
        .field("ticket_id", ticket_id)
        .field("price", price)
        .emit();
}

pub fn emit_resale_cancelled(seller_id: &AccountId, ticket_id: u64) {
    EventBuilder::new(SALE, "resale_cancelled", seller_id)
        .field("ticket_id", ticket_id)
        .emit();
}

pub fn emit_ticket_resold(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    ticket_id: u64,
    price: U128,
    platform_fee: U128,
    royalty: U128,
) {
    EventBuilder::new(SALE, "ticket_resold", buyer_id)
        .field("seller_id", seller_id)
        .field("ticket_id", ticket_id)
        .field("price", price)
        .field("platform_fee", platform_fee)
        .field("royalty", royalty)
        .emit();
}

pub fn emit_ticket_listed(seller_id: &AccountId, listing_id: u64, ticket_id: u64, price: U128) {
    EventBuilder::new(SALE, "ticket_listed", seller_id)
        .field("listing_id", listing_id)
        .field("ticket_id", ticket_id)
        .field("price", price)
        .emit();
}

pub fn emit_listing_cancelled(actor_id: &AccountId, listing_id: u64, ticket_id: u64, reason: &str) {
    EventBuilder::new(SALE, "listing_cancelled", actor_id)
        .field("listing_id", listing_id)
        .field("ticket_id", ticket_id)
        .field("reason", reason)
        .emit();
}

pub fn emit_listing_price_updated(
    seller_id: &AccountId,
    listing_id: u64,
    old_price: U128,
    new_price: U128,
) {
    EventBuilder::new(SALE, "listing_price_updated", seller_id)
        .field("listing_id", listing_id)
        .field("old_price", old_price)
        .field("new_price", new_price)
        .emit();
}

pub fn emit_listing_purchased(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    listing_id: u64,
    ticket_id: u64,
    price: U128,
    platform_fee: U128,
    royalty: U128,
) {
    EventBuilder::new(SALE, "listing_purchased", buyer_id)
        .field("seller_id", seller_id)
        .field("listing_id", listing_id)
        .field("ticket_id", ticket_id)
        .field("price", price)
        .field("platform_fee", platform_fee)
        .field("royalty", royalty)
        .emit();
}
