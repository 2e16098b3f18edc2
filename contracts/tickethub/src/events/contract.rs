use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_treasury_changed(owner_id: &AccountId, old_treasury: &AccountId, new_treasury: &AccountId) {
    EventBuilder::new(CONTRACT, "treasury_changed", owner_id)
        .field("old_treasury", old_treasury)
        .field("new_treasury", new_treasury)
        .emit();
}

pub fn emit_emergency_admin_changed(
    owner_id: &AccountId,
    old_admin: &AccountId,
    new_admin: &AccountId,
) {
    EventBuilder::new(CONTRACT, "emergency_admin_changed", owner_id)
        .field("old_admin", old_admin)
        .field("new_admin", new_admin)
        .emit();
}

pub fn emit_paused(actor_id: &AccountId) {
    EventBuilder::new(CONTRACT, "paused", actor_id).emit();
}

pub fn emit_unpaused(actor_id: &AccountId) {
    EventBuilder::new(CONTRACT, "unpaused", actor_id).emit();
}
