use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, listing_id: u64) -> Option<Listing> {
        self.listings_by_id.get(&listing_id).cloned()
    }

    /// The active listing for a ticket, if any.
    pub fn get_listing_for_ticket(&self, ticket_id: u64) -> Option<Listing> {
        let listing_id = self.ticket_to_listing.get(&ticket_id)?;
        self.listings_by_id.get(listing_id).cloned()
    }

    pub fn get_listings(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<Listing> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(MAX_ENUMERATION_LIMIT).min(MAX_ENUMERATION_LIMIT) as usize;
        self.listings_by_id
            .values()
            .filter(|listing| listing.active)
            .skip(from)
            .take(limit)
            .cloned()
            .collect()
    }
}
