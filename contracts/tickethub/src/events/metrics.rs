use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::METRIC;

// Fire-and-forget analytics sink: a log line per named metric. Consumers
// aggregate off-chain; emission never affects the enclosing operation.
pub fn emit_metric(actor_id: &AccountId, name: &'static str, value: u64) {
    EventBuilder::new(METRIC, name, actor_id)
        .field("value", value)
        .emit();
}
