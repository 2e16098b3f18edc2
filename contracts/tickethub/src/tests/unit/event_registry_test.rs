use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- create_event ---

#[test]
fn create_event_happy() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    assert_eq!(event_id, 0);
    let event = contract.get_event(event_id).unwrap();
    assert_eq!(event.creator_id, creator());
    assert_eq!(event.name, "Rust Conf");
    assert_eq!(event.ticket_price, U128(100));
    assert_eq!(event.max_supply, 100);
    assert_eq!(event.current_supply, 0);
    // 150% of face value 100, frozen at creation.
    assert_eq!(event.max_resale_price, U128(150));
    assert_eq!(event.royalty_bps, 500);
    assert!(event.is_active);
    assert!(!event.completed);
    assert_eq!(contract.total_events().0, 1);
}

#[test]
fn create_event_ids_are_sequential() {
    let mut contract = new_contract();
    let first = create_sample_event(&mut contract);
    let second = create_sample_event(&mut contract);

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(contract.next_event_id, 2);
}

#[test]
fn create_event_past_date_fails() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());

    let mut config = sample_config();
    config.event_date = BASE_TS - 1;
    let err = contract
        .internal_create_event(&creator(), config)
        .unwrap_err();
    assert!(matches!(err, TicketingError::InvalidInput(_)));
}

#[test]
fn create_event_while_paused_fails() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    contract.pause().unwrap();

    testing_env!(context(creator()).build());
    let err = contract
        .internal_create_event(&creator(), sample_config())
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

// --- complete_event ---

#[test]
fn complete_event_happy() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    testing_env!(context_at(creator(), EVENT_DATE + DAY_NS + 1).build());
    contract
        .internal_complete_event(&creator(), event_id)
        .unwrap();
    assert!(contract.get_event(event_id).unwrap().completed);
}

#[test]
fn complete_event_before_delay_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    // Exactly 24h past the event date is still too early.
    testing_env!(context_at(creator(), EVENT_DATE + DAY_NS).build());
    let err = contract
        .internal_complete_event(&creator(), event_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

#[test]
fn complete_event_extreme_date_stays_ongoing() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    let mut config = sample_config();
    // Completion deadline would land past u64::MAX; the event must stay
    // ongoing instead of overflowing.
    config.event_date = u64::MAX - 1;
    let event_id = contract.internal_create_event(&creator(), config).unwrap();

    testing_env!(context_at(creator(), u64::MAX).build());
    let err = contract
        .internal_complete_event(&creator(), event_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
    assert!(!contract.get_event(event_id).unwrap().completed);
}

#[test]
fn complete_event_non_creator_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    testing_env!(context_at(buyer(), EVENT_DATE + DAY_NS + 1).build());
    let err = contract
        .internal_complete_event(&buyer(), event_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::Unauthorized(_)));
}

#[test]
fn complete_event_twice_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    testing_env!(context_at(creator(), EVENT_DATE + DAY_NS + 1).build());
    contract
        .internal_complete_event(&creator(), event_id)
        .unwrap();
    let err = contract
        .internal_complete_event(&creator(), event_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

// --- deactivate / reactivate ---

#[test]
fn deactivate_and_reactivate_event() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    testing_env!(context(owner()).build());
    contract
        .internal_deactivate_event(&owner(), event_id)
        .unwrap();
    assert!(!contract.get_event(event_id).unwrap().is_active);

    contract
        .internal_reactivate_event(&owner(), event_id)
        .unwrap();
    assert!(contract.get_event(event_id).unwrap().is_active);
}

#[test]
fn deactivate_event_by_emergency_admin() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    testing_env!(context(emergency_admin()).build());
    contract
        .internal_deactivate_event(&emergency_admin(), event_id)
        .unwrap();
    assert!(!contract.get_event(event_id).unwrap().is_active);
}

#[test]
fn deactivate_event_non_admin_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    testing_env!(context(creator()).build());
    let err = contract
        .internal_deactivate_event(&creator(), event_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::Unauthorized(_)));
}

#[test]
fn deactivate_inactive_event_fails() {
    let mut contract = new_contract();
    let event_id = create_sample_event(&mut contract);

    testing_env!(context(owner()).build());
    contract
        .internal_deactivate_event(&owner(), event_id)
        .unwrap();
    let err = contract
        .internal_deactivate_event(&owner(), event_id)
        .unwrap_err();
    assert!(matches!(err, TicketingError::StateConflict(_)));
}

#[test]
fn deactivate_missing_event_fails() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract.internal_deactivate_event(&owner(), 99).unwrap_err();
    assert!(matches!(err, TicketingError::NotFound(_)));
}
