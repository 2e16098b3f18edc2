use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Escrow listing: moves ticket custody into the contract and records the
    /// listing. At most one active listing per ticket.
    #[payable]
    #[handle_result]
    pub fn list_ticket(&mut self, ticket_id: u64, price: U128) -> Result<u64, TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_list_ticket(&actor_id, ticket_id, price)
    }

    #[payable]
    #[handle_result]
    pub fn cancel_listing(&mut self, listing_id: u64) -> Result<(), TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_cancel_listing(&actor_id, listing_id)
    }

    #[payable]
    #[handle_result]
    pub fn update_listing_price(
        &mut self,
        listing_id: u64,
        price: U128,
    ) -> Result<(), TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_update_listing_price(&actor_id, listing_id, price)
    }

    /// Admin escape hatch: returns the escrowed ticket to the seller
    /// unconditionally.
    #[handle_result]
    pub fn emergency_cancel_listing(&mut self, listing_id: u64) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.internal_emergency_cancel_listing(&actor_id, listing_id)
    }
}

impl Contract {
    pub(crate) fn internal_list_ticket(
        &mut self,
        actor_id: &AccountId,
        ticket_id: u64,
        price: U128,
    ) -> Result<u64, TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();

        let ticket = self
            .tickets_by_id
            .get(&ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(ticket_id))?;
        if &ticket.owner_id != actor_id {
            return Err(TicketingError::only_owner("the ticket owner"));
        }
        if self.ticket_to_listing.contains_key(&ticket_id) {
            return Err(TicketingError::DuplicateResource(
                "Ticket is already listed".into(),
            ));
        }
        let event = self
            .events_by_id
            .get(&ticket.event_id)
            .ok_or_else(|| TicketingError::event_not_found(ticket.event_id))?;

        self.check_ticket_resalable(event, ticket, now)?;
        crate::fees::check_resale_price(event, price.0)?;

        let listing_id = self.next_listing_id;
        self.next_listing_id = self
            .next_listing_id
            .checked_add(1)
            .ok_or_else(|| TicketingError::counter_overflow("listing ID"))?;

        // Custody moves into escrow; this also voids any direct-resale approval.
        let escrow_id = env::current_account_id();
        self.internal_transfer_ticket(actor_id, &escrow_id, ticket_id, "marketplace escrow")?;

        self.listings_by_id.insert(
            listing_id,
            Listing {
                id: listing_id,
                ticket_id,
                seller_id: actor_id.clone(),
                price,
                active: true,
                listed_at: now,
            },
        );
        self.ticket_to_listing.insert(ticket_id, listing_id);

        events::emit_ticket_listed(actor_id, listing_id, ticket_id, price);
        Ok(listing_id)
    }

    pub(crate) fn internal_cancel_listing(
        &mut self,
        actor_id: &AccountId,
        listing_id: u64,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;

        let listing = self
            .listings_by_id
            .get(&listing_id)
            .ok_or_else(|| TicketingError::listing_not_found(listing_id))?
            .clone();
        if !listing.active {
            return Err(TicketingError::StateConflict(
                "Listing is no longer active".into(),
            ));
        }
        if &listing.seller_id != actor_id {
            return Err(TicketingError::only_owner("the listing seller"));
        }

        self.release_listing(&listing, actor_id, "seller_cancelled")
    }

    pub(crate) fn internal_update_listing_price(
        &mut self,
        actor_id: &AccountId,
        listing_id: u64,
        price: U128,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;

        let listing = self
            .listings_by_id
            .get(&listing_id)
            .ok_or_else(|| TicketingError::listing_not_found(listing_id))?
            .clone();
        if !listing.active {
            return Err(TicketingError::StateConflict(
                "Listing is no longer active".into(),
            ));
        }
        if &listing.seller_id != actor_id {
            return Err(TicketingError::only_owner("the listing seller"));
        }

        let ticket = self
            .tickets_by_id
            .get(&listing.ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(listing.ticket_id))?;
        let event = self
            .events_by_id
            .get(&ticket.event_id)
            .ok_or_else(|| TicketingError::event_not_found(ticket.event_id))?;
        // New price is re-validated against live bounds.
        crate::fees::check_resale_price(event, price.0)?;

        let old_price = listing.price;
        let mut listing = listing;
        listing.price = price;
        self.listings_by_id.insert(listing_id, listing);

        events::emit_listing_price_updated(actor_id, listing_id, old_price, price);
        Ok(())
    }

    pub(crate) fn internal_emergency_cancel_listing(
        &mut self,
        actor_id: &AccountId,
        listing_id: u64,
    ) -> Result<(), TicketingError> {
        self.check_admin(actor_id)?;

        let listing = self
            .listings_by_id
            .get(&listing_id)
            .ok_or_else(|| TicketingError::listing_not_found(listing_id))?
            .clone();
        if !listing.active {
            return Err(TicketingError::StateConflict(
                "Listing is no longer active".into(),
            ));
        }

        self.release_listing(&listing, actor_id, "emergency_cancelled")
    }

    // Deactivates the listing and returns the escrowed ticket to the seller.
    fn release_listing(
        &mut self,
        listing: &Listing,
        actor_id: &AccountId,
        reason: &str,
    ) -> Result<(), TicketingError> {
        let mut updated = listing.clone();
        updated.active = false;
        self.listings_by_id.insert(listing.id, updated);
        self.ticket_to_listing.remove(&listing.ticket_id);

        let escrow_id = env::current_account_id();
        self.internal_transfer_ticket(
            &escrow_id,
            &listing.seller_id,
            listing.ticket_id,
            "escrow returned",
        )?;

        events::emit_listing_cancelled(actor_id, listing.id, listing.ticket_id, reason);
        Ok(())
    }
}
