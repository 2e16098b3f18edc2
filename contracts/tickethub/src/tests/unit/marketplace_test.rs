use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

fn escrow() -> near_sdk::AccountId {
    "tickethub.near".parse().unwrap()
}

fn listed_ticket(contract: &mut Contract, price: u128) -> (u64, u64, u64) {
    let event_id = create_sample_event(contract);
    let ticket_id = buy_one_ticket(contract, &buyer(), event_id, "qr-1");
    testing_env!(context(buyer()).build());
    let listing_id = contract
        .internal_list_ticket(&buyer(), ticket_id, U128(price))
        .unwrap();
    (event_id, ticket_id, listing_id)
}

// --- list_ticket ---

#[test]
fn list_ticket_happy() {
    let mut contract = new_contract();
    let (_, ticket_id, listing_id) = listed_ticket(&mut contract, 150);

    let listing = contract.get_listing(listing_id).unwrap();
    assert_eq!(listing.ticket_id, ticket_id);
    assert_eq!(listing.seller_id, buyer());
    assert_eq!(listing.price, U128(150));
    assert!(listing.active);

    // Custody sits with the contract while listed.
    assert_eq!(contract.get_ticket(ticket_id).unwrap().owner_id, escrow());
    assert_eq!(contract.tickets_for_owner(buyer(), None, None).len(), 0);
    assert!(contract.get_listing_for_ticket(ticket_id).is_some());
}

#[test]
fn list_ticket_twice_fails() {
    let mut contract = new_contract();
    let (_, ticket_id, _) = listed_ticket(&mut contract, 150);

    // The escrow holds it now, so the seller no longer owns it; but the
    // reverse index rejects the double listing first.
    let err = contract
        .internal_list_ticket(&buyer(), ticket_id, U128(140))
        .unwrap_err();
    assert!(matches!(err, TicketingError::DuplicateResource(_)));
}

#[test]
fn list_ticket_non_owner_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);
    let ticket_id = buy_one_ticket(&mut contract, &buyer(), event_id, "qr-1");

    testing_env!(context(second_buyer()).build());
    let err = contract
        .internal_list_ticket(&second_buyer(), ticket_id, U128(150))
        .unwrap_err();
    assert!(matches!(err, TicketingError::Unauthorized(_)));
}

#[test]
fn list_ticket_out_of_bounds_price_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);
    let ticket_id = buy_one_ticket(&mut contract, &buyer(), event_id, "qr-1");

    testing_env!(context(buyer()).build());
    let err = contract
        .internal_list_ticket(&buyer(), ticket_id, U128(151))
        .unwrap_err();
    assert!(matches!(err, TicketingError::PaymentOutOfBounds(_)));
}

#[test]
fn list_scanned_ticket_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);
    let ticket_id = buy_one_ticket(&mut contract, &buyer(), event_id, "qr-1");
    testing_env!(context_at(creator(), EVENT_DATE).build());
    contract
        .internal_scan_ticket(&creator(), ticket_id)
        .unwrap();

    testing_env!(context_at(buyer(), EVENT_DATE).build());
    let err = contract
        .internal_list_ticket(&buyer(), ticket_id, U128(150))
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

#[test]
fn list_ticket_voids_direct_resale_approval() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);
    let ticket_id = buy_one_ticket(&mut contract, &buyer(), event_id, "qr-1");

    testing_env!(context(buyer()).build());
    contract
        .internal_resell_ticket(&buyer(), ticket_id, U128(120))
        .unwrap();
    contract
        .internal_list_ticket(&buyer(), ticket_id, U128(150))
        .unwrap();

    assert!(contract.get_resale_approval(ticket_id).is_none());
}

// --- cancel_listing ---

#[test]
fn cancel_listing_returns_ticket() {
    let mut contract = new_contract();
    let (_, ticket_id, listing_id) = listed_ticket(&mut contract, 150);

    contract
        .internal_cancel_listing(&buyer(), listing_id)
        .unwrap();

    assert!(!contract.get_listing(listing_id).unwrap().active);
    assert!(contract.get_listing_for_ticket(ticket_id).is_none());
    assert_eq!(contract.get_ticket(ticket_id).unwrap().owner_id, buyer());
    assert_eq!(contract.tickets_for_owner(buyer(), None, None).len(), 1);
}

#[test]
fn cancel_listing_non_seller_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    testing_env!(context(second_buyer()).build());
    let err = contract
        .internal_cancel_listing(&second_buyer(), listing_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::Unauthorized(_)));
}

#[test]
fn cancel_listing_twice_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    contract
        .internal_cancel_listing(&buyer(), listing_id)
        .unwrap();
    let err = contract
        .internal_cancel_listing(&buyer(), listing_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

#[test]
fn emergency_cancel_returns_ticket_to_seller() {
    let mut contract = new_contract();
    let (_, ticket_id, listing_id) = listed_ticket(&mut contract, 150);

    // Works even while the platform is paused.
    testing_env!(context(owner()).build());
    contract.pause().unwrap();
    contract
        .internal_emergency_cancel_listing(&emergency_admin(), listing_id)
        .unwrap();

    assert!(!contract.get_listing(listing_id).unwrap().active);
    assert_eq!(contract.get_ticket(ticket_id).unwrap().owner_id, buyer());
}

#[test]
fn emergency_cancel_non_admin_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    let err = contract
        .internal_emergency_cancel_listing(&buyer(), listing_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::Unauthorized(_)));
}

// --- update_listing_price ---

#[test]
fn update_listing_price_happy() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    contract
        .internal_update_listing_price(&buyer(), listing_id, U128(120))
        .unwrap();
    assert_eq!(contract.get_listing(listing_id).unwrap().price, U128(120));
}

#[test]
fn update_listing_price_out_of_bounds_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    let err = contract
        .internal_update_listing_price(&buyer(), listing_id, U128(151))
        .unwrap_err();
    assert!(matches!(err, TicketingError::PaymentOutOfBounds(_)));
    assert_eq!(contract.get_listing(listing_id).unwrap().price, U128(150));
}

#[test]
fn update_listing_price_non_seller_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    testing_env!(context(second_buyer()).build());
    let err = contract
        .internal_update_listing_price(&second_buyer(), listing_id, U128(120))
        .unwrap_err();
    assert!(matches!(err, TicketingError::Unauthorized(_)));
}

// --- buy_ticket ---

#[test]
fn buy_ticket_happy() {
    let mut contract = new_contract();
    let (_, ticket_id, listing_id) = listed_ticket(&mut contract, 150);

    testing_env!(context_with_deposit(second_buyer(), 150).build());
    contract
        .internal_buy_ticket(&second_buyer(), listing_id, 150)
        .unwrap();

    assert!(!contract.get_listing(listing_id).unwrap().active);
    assert!(contract.get_listing_for_ticket(ticket_id).is_none());
    assert_eq!(contract.get_ticket(ticket_id).unwrap().owner_id, second_buyer());
    assert_eq!(contract.get_stats().tickets_resold, 1);
}

#[test]
fn buy_ticket_wrong_deposit_fails() {
    let mut contract = new_contract();
    let (_, ticket_id, listing_id) = listed_ticket(&mut contract, 150);

    testing_env!(context_with_deposit(second_buyer(), 140).build());
    let err = contract
        .internal_buy_ticket(&second_buyer(), listing_id, 140)
        .unwrap_err();
    assert!(matches!(err, TicketingError::PaymentMismatch(_)));
    assert_eq!(contract.get_ticket(ticket_id).unwrap().owner_id, escrow());
}

#[test]
fn buy_own_listing_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    testing_env!(context_with_deposit(buyer(), 150).build());
    let err = contract
        .internal_buy_ticket(&buyer(), listing_id, 150)
        .unwrap_err();
    assert!(matches!(err, TicketingError::InvalidInput(_)));
}

#[test]
fn buy_cancelled_listing_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    contract
        .internal_cancel_listing(&buyer(), listing_id)
        .unwrap();
    testing_env!(context_with_deposit(second_buyer(), 150).build());
    let err = contract
        .internal_buy_ticket(&second_buyer(), listing_id, 150)
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

#[test]
fn buy_ticket_after_event_started_fails() {
    let mut contract = new_contract();
    let (_, _, listing_id) = listed_ticket(&mut contract, 150);

    testing_env!(context_at(second_buyer(), EVENT_DATE).build());
    let err = contract
        .internal_buy_ticket(&second_buyer(), listing_id, 150)
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

#[test]
fn buy_ticket_missing_listing_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(second_buyer(), 150).build());
    let err = contract
        .internal_buy_ticket(&second_buyer(), 7, 150)
        .unwrap_err();
    assert!(matches!(err, TicketingError::NotFound(_)));
}

#[test]
fn relisting_after_purchase_works() {
    let mut contract = new_contract();
    let (_, ticket_id, listing_id) = listed_ticket(&mut contract, 150);

    testing_env!(context_with_deposit(second_buyer(), 150).build());
    contract
        .internal_buy_ticket(&second_buyer(), listing_id, 150)
        .unwrap();

    testing_env!(context(second_buyer()).build());
    let new_listing_id = contract
        .internal_list_ticket(&second_buyer(), ticket_id, U128(100))
        .unwrap();
    assert_ne!(new_listing_id, listing_id);
    assert_eq!(
        contract.get_listing_for_ticket(ticket_id).unwrap().id,
        new_listing_id
    );
}
