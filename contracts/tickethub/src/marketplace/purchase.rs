use crate::*;

#[near]
impl Contract {
    /// Buy an escrowed listing. Deposit must match the listed price exactly;
    /// the split mirrors the direct resale path.
    #[payable]
    #[handle_result]
    pub fn buy_ticket(&mut self, listing_id: u64) -> Result<(), TicketingError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_buy_ticket(&buyer_id, listing_id, deposit)
    }
}

impl Contract {
    pub(crate) fn internal_buy_ticket(
        &mut self,
        buyer_id: &AccountId,
        listing_id: u64,
        deposit: u128,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();

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
        if buyer_id == &listing.seller_id {
            return Err(TicketingError::InvalidInput(
                "Cannot buy your own listing".into(),
            ));
        }

        let ticket = self
            .tickets_by_id
            .get(&listing.ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(listing.ticket_id))?
            .clone();
        let event = self
            .events_by_id
            .get(&ticket.event_id)
            .ok_or_else(|| TicketingError::event_not_found(ticket.event_id))?
            .clone();
        // Event state may have moved since listing time; re-validate before
        // settling. The listed price itself was bound-checked when stored and
        // event bounds are immutable, so only exact payment is checked here.
        self.check_ticket_resalable(&event, &ticket, now)?;

        if deposit != listing.price.0 {
            return Err(TicketingError::PaymentMismatch(format!(
                "Attached deposit {} does not match listing price {}",
                deposit, listing.price.0
            )));
        }

        let mut updated = listing.clone();
        updated.active = false;
        self.listings_by_id.insert(listing_id, updated);
        self.ticket_to_listing.remove(&listing.ticket_id);

        let escrow_id = env::current_account_id();
        self.internal_transfer_ticket(&escrow_id, buyer_id, listing.ticket_id, "marketplace sale")?;

        let split = crate::fees::resale_split(listing.price.0, event.royalty_bps);
        self.record_ticket_resold(buyer_id);
        events::emit_listing_purchased(
            buyer_id,
            &listing.seller_id,
            listing_id,
            listing.ticket_id,
            listing.price,
            U128(split.platform_fee),
            U128(split.royalty),
        );

        crate::fees::transfer_funds(&self.treasury_id, split.platform_fee);
        crate::fees::transfer_funds(&event.creator_id, split.royalty);
        crate::fees::transfer_funds(&listing.seller_id, split.seller_amount);

        Ok(())
    }
}
