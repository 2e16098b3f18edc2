use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// Standing authorization for the direct peer-to-peer resale path. Custody
/// stays with the seller; the approval dies if ownership changes or the
/// ticket is scanned.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct ResaleApproval {
    pub seller_id: AccountId,
    pub price: U128,
    pub approved_at: u64,
}
