use crate::*;

#[near]
impl Contract {
    pub fn get_ticket(&self, ticket_id: u64) -> Option<Ticket> {
        self.tickets_by_id.get(&ticket_id).cloned()
    }

    pub fn tickets_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<Ticket> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(MAX_ENUMERATION_LIMIT).min(MAX_ENUMERATION_LIMIT) as usize;
        match self.tickets_per_owner.get(&account_id) {
            Some(owned) => owned
                .iter()
                .skip(from)
                .take(limit)
                .filter_map(|ticket_id| self.tickets_by_id.get(ticket_id).cloned())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn tickets_for_event(
        &self,
        event_id: u64,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<Ticket> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(MAX_ENUMERATION_LIMIT).min(MAX_ENUMERATION_LIMIT) as usize;
        match self.tickets_per_event.get(&event_id) {
            Some(issued) => issued
                .iter()
                .skip(from)
                .take(limit)
                .filter_map(|ticket_id| self.tickets_by_id.get(ticket_id).cloned())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn ticket_supply_for_event(&self, event_id: u64) -> Option<u32> {
        self.events_by_id
            .get(&event_id)
            .map(|event| event.current_supply)
    }

    pub fn is_qr_code_used(&self, qr_code_hash: String) -> bool {
        self.used_qr_hashes.contains(&qr_code_hash)
    }
}
