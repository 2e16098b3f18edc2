use std::collections::HashSet;

use crate::*;

#[near]
impl Contract {
    /// Primary sale. Attached deposit must equal `ticket_price * quantity`
    /// exactly; no change is given.
    #[payable]
    #[handle_result]
    pub fn purchase_tickets(
        &mut self,
        event_id: u64,
        quantity: u32,
        qr_code_hashes: Vec<String>,
    ) -> Result<Vec<u64>, TicketingError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_purchase_tickets(&buyer_id, event_id, quantity, qr_code_hashes, deposit)
    }
}

impl Contract {
    pub(crate) fn internal_purchase_tickets(
        &mut self,
        buyer_id: &AccountId,
        event_id: u64,
        quantity: u32,
        qr_code_hashes: Vec<String>,
        deposit: u128,
    ) -> Result<Vec<u64>, TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();

        if quantity == 0 || quantity > MAX_PURCHASE_QUANTITY {
            return Err(TicketingError::InvalidInput(format!(
                "Quantity must be 1..={}",
                MAX_PURCHASE_QUANTITY
            )));
        }
        if qr_code_hashes.len() != quantity as usize {
            return Err(TicketingError::InvalidInput(format!(
                "Expected {} QR code hashes, got {}",
                quantity,
                qr_code_hashes.len()
            )));
        }

        let event = self
            .events_by_id
            .get(&event_id)
            .ok_or_else(|| TicketingError::event_not_found(event_id))?
            .clone();
        if !event.is_active {
            return Err(TicketingError::event_not_active());
        }
        if event.completed {
            return Err(TicketingError::event_completed());
        }
        if now >= event.event_date {
            return Err(TicketingError::event_started());
        }
        if event.current_supply + quantity > event.max_supply {
            return Err(TicketingError::StateConflict(format!(
                "Supply exceeded: {} of {} tickets issued, {} requested",
                event.current_supply, event.max_supply, quantity
            )));
        }

        let expected = event
            .ticket_price
            .0
            .checked_mul(quantity as u128)
            .ok_or_else(|| TicketingError::Internal("Payment amount overflow".into()))?;
        if deposit != expected {
            return Err(TicketingError::PaymentMismatch(format!(
                "Attached deposit {} does not match required payment {}",
                deposit, expected
            )));
        }

        // Every hash in the batch is validated against the global registry
        // (and against the batch itself) before any ticket is minted, so a
        // single duplicate aborts the whole purchase with no state change.
        let mut batch_seen: HashSet<&str> = HashSet::new();
        for qr_hash in &qr_code_hashes {
            crate::validation::validate_qr_hash(qr_hash)?;
            if self.used_qr_hashes.contains(qr_hash) || !batch_seen.insert(qr_hash) {
                return Err(TicketingError::DuplicateResource(format!(
                    "QR code hash already used: {}",
                    qr_hash
                )));
            }
        }

        let mut ticket_ids = Vec::with_capacity(quantity as usize);
        for qr_hash in qr_code_hashes {
            let ticket_id = self.next_ticket_id;
            self.next_ticket_id = self
                .next_ticket_id
                .checked_add(1)
                .ok_or_else(|| TicketingError::counter_overflow("ticket ID"))?;

            self.used_qr_hashes.insert(qr_hash.clone());
            let ticket = Ticket {
                id: ticket_id,
                event_id,
                owner_id: buyer_id.clone(),
                purchase_price: event.ticket_price,
                is_scanned: false,
                is_transformed: false,
                purchased_at: now,
                qr_code_hash: qr_hash,
                metadata_ref: event.metadata_ref.clone(),
            };
            self.tickets_by_id.insert(ticket_id, ticket);
            self.add_ticket_to_owner(buyer_id, ticket_id);
            self.add_ticket_to_event(event_id, ticket_id);
            ticket_ids.push(ticket_id);
        }

        let mut event = event;
        event.current_supply += quantity;
        let creator_id = event.creator_id.clone();
        let ticket_price = event.ticket_price;
        self.events_by_id.insert(event_id, event);

        self.record_tickets_sold(buyer_id, quantity as u64);
        for ticket_id in &ticket_ids {
            events::emit_ticket_issued(buyer_id, *ticket_id, event_id, ticket_price);
        }

        // Settlement last: state is fully committed before funds move.
        let (platform_fee, creator_amount) = crate::fees::primary_split(deposit);
        crate::fees::transfer_funds(&self.treasury_id, platform_fee);
        crate::fees::transfer_funds(&creator_id, creator_amount);

        Ok(ticket_ids)
    }
}
