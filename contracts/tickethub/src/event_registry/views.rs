use near_sdk::json_types::U64;

use crate::*;

#[near]
impl Contract {
    pub fn get_event(&self, event_id: u64) -> Option<Event> {
        self.events_by_id.get(&event_id).cloned()
    }

    pub fn total_events(&self) -> U64 {
        U64(self.events_by_id.len() as u64)
    }

    pub fn get_events(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<Event> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(MAX_ENUMERATION_LIMIT).min(MAX_ENUMERATION_LIMIT) as usize;
        self.events_by_id
            .values()
            .skip(from)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn get_events_by_creator(
        &self,
        creator_id: AccountId,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<Event> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(MAX_ENUMERATION_LIMIT).min(MAX_ENUMERATION_LIMIT) as usize;
        self.events_by_id
            .values()
            .filter(|event| event.creator_id == creator_id)
            .skip(from)
            .take(limit)
            .cloned()
            .collect()
    }
}
