use crate::*;

pub const METRIC_TICKET_SOLD: &str = "ticket_sold";
pub const METRIC_TICKET_RESOLD: &str = "ticket_resold";
pub const METRIC_TICKET_SCANNED: &str = "ticket_scanned";
pub const METRIC_TICKET_TRANSFORMED: &str = "ticket_transformed";

/// Monotonic platform counters, mirrored to `METRIC` log events.
#[near(serializers = [borsh, json])]
#[derive(Clone, Default)]
pub struct PlatformStats {
    pub tickets_sold: u64,
    pub tickets_resold: u64,
    pub tickets_scanned: u64,
    pub tickets_transformed: u64,
}

impl Contract {
    pub(crate) fn record_tickets_sold(&mut self, actor_id: &AccountId, count: u64) {
        self.stats.tickets_sold = self.stats.tickets_sold.saturating_add(count);
        events::emit_metric(actor_id, METRIC_TICKET_SOLD, count);
    }

    pub(crate) fn record_ticket_resold(&mut self, actor_id: &AccountId) {
        self.stats.tickets_resold = self.stats.tickets_resold.saturating_add(1);
        events::emit_metric(actor_id, METRIC_TICKET_RESOLD, 1);
    }

    pub(crate) fn record_ticket_scanned(&mut self, actor_id: &AccountId) {
        self.stats.tickets_scanned = self.stats.tickets_scanned.saturating_add(1);
        events::emit_metric(actor_id, METRIC_TICKET_SCANNED, 1);
    }

    pub(crate) fn record_ticket_transformed(&mut self, actor_id: &AccountId) {
        self.stats.tickets_transformed = self.stats.tickets_transformed.saturating_add(1);
        events::emit_metric(actor_id, METRIC_TICKET_TRANSFORMED, 1);
    }
}

#[near]
impl Contract {
    pub fn get_stats(&self) -> PlatformStats {
        self.stats.clone()
    }
}
