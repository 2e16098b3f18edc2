use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Authorize a direct resale at `price`. Custody does not move; the buyer
    /// settles through `buy_resold_ticket`.
    #[payable]
    #[handle_result]
    pub fn resell_ticket(&mut self, ticket_id: u64, price: U128) -> Result<(), TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_resell_ticket(&actor_id, ticket_id, price)
    }

    #[payable]
    #[handle_result]
    pub fn cancel_resale(&mut self, ticket_id: u64) -> Result<(), TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_cancel_resale(&actor_id, ticket_id)
    }

    /// Buy a directly approved ticket. Deposit must equal the approved price
    /// exactly; event and ticket state are re-validated so a stale approval
    /// cannot settle.
    #[payable]
    #[handle_result]
    pub fn buy_resold_ticket(&mut self, ticket_id: u64) -> Result<(), TicketingError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_buy_resold_ticket(&buyer_id, ticket_id, deposit)
    }
}

impl Contract {
    pub(crate) fn internal_resell_ticket(
        &mut self,
        actor_id: &AccountId,
        ticket_id: u64,
        price: U128,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();

        let ticket = self
            .tickets_by_id
            .get(&ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(ticket_id))?;
        if &ticket.owner_id != actor_id {
            return Err(TicketingError::only_owner("the ticket owner"));
        }
        let event = self
            .events_by_id
            .get(&ticket.event_id)
            .ok_or_else(|| TicketingError::event_not_found(ticket.event_id))?;

        self.check_ticket_resalable(event, ticket, now)?;
        crate::fees::check_resale_price(event, price.0)?;

        // Re-approving overwrites the previous asking price.
        self.resale_approvals.insert(
            ticket_id,
            ResaleApproval {
                seller_id: actor_id.clone(),
                price,
                approved_at: now,
            },
        );

        events::emit_resale_approved(actor_id, ticket_id, price);
        Ok(())
    }

    pub(crate) fn internal_cancel_resale(
        &mut self,
        actor_id: &AccountId,
        ticket_id: u64,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;

        let ticket = self
            .tickets_by_id
            .get(&ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(ticket_id))?;
        if &ticket.owner_id != actor_id {
            return Err(TicketingError::only_owner("the ticket owner"));
        }
        if self.resale_approvals.remove(&ticket_id).is_none() {
            return Err(TicketingError::NotFound(format!(
                "No resale approval for ticket {}",
                ticket_id
            )));
        }

        events::emit_resale_cancelled(actor_id, ticket_id);
        Ok(())
    }

    pub(crate) fn internal_buy_resold_ticket(
        &mut self,
        buyer_id: &AccountId,
        ticket_id: u64,
        deposit: u128,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();

        let ticket = self
            .tickets_by_id
            .get(&ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(ticket_id))?
            .clone();
        let approval = self
            .resale_approvals
            .get(&ticket_id)
            .ok_or_else(|| {
                TicketingError::NotFound(format!("No resale approval for ticket {}", ticket_id))
            })?
            .clone();

        if buyer_id == &ticket.owner_id {
            return Err(TicketingError::InvalidInput(
                "Cannot buy your own ticket".into(),
            ));
        }
        // Staleness defense: the approval is only as good as the ownership it
        // was granted under.
        if approval.seller_id != ticket.owner_id {
            return Err(TicketingError::StateConflict(
                "Resale approval is stale: ticket ownership has changed".into(),
            ));
        }

        let event = self
            .events_by_id
            .get(&ticket.event_id)
            .ok_or_else(|| TicketingError::event_not_found(ticket.event_id))?
            .clone();
        self.check_ticket_resalable(&event, &ticket, now)?;
        // Bounds are re-read live from event state, not snapshotted at
        // approval time.
        crate::fees::check_resale_price(&event, approval.price.0)?;

        if deposit != approval.price.0 {
            return Err(TicketingError::PaymentMismatch(format!(
                "Attached deposit {} does not match resale price {}",
                deposit, approval.price.0
            )));
        }

        let seller_id = approval.seller_id;
        self.internal_transfer_ticket(&seller_id, buyer_id, ticket_id, "direct resale")?;

        let split = crate::fees::resale_split(approval.price.0, event.royalty_bps);
        self.record_ticket_resold(buyer_id);
        events::emit_ticket_resold(
            buyer_id,
            &seller_id,
            ticket_id,
            approval.price,
            U128(split.platform_fee),
            U128(split.royalty),
        );

        crate::fees::transfer_funds(&self.treasury_id, split.platform_fee);
        crate::fees::transfer_funds(&event.creator_id, split.royalty);
        crate::fees::transfer_funds(&seller_id, split.seller_amount);

        Ok(())
    }
}
