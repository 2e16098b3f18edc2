use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Entry-gate scan. Creator-only, inside the 24h window starting at the
    /// event date. Irreversible: a scanned ticket can never be resold.
    #[payable]
    #[handle_result]
    pub fn scan_ticket(&mut self, ticket_id: u64) -> Result<(), TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_scan_ticket(&actor_id, ticket_id)
    }

    /// Post-event transformation into a keepsake: swaps the display metadata
    /// pointer. Requires a completed event and a scanned ticket.
    #[payable]
    #[handle_result]
    pub fn transform_ticket(
        &mut self,
        ticket_id: u64,
        new_metadata_ref: String,
    ) -> Result<(), TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_transform_ticket(&actor_id, ticket_id, new_metadata_ref)
    }
}

impl Contract {
    pub(crate) fn internal_scan_ticket(
        &mut self,
        actor_id: &AccountId,
        ticket_id: u64,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();

        let ticket = self
            .tickets_by_id
            .get(&ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(ticket_id))?
            .clone();
        let event = self
            .events_by_id
            .get(&ticket.event_id)
            .ok_or_else(|| TicketingError::event_not_found(ticket.event_id))?;
        self.check_event_creator(actor_id, event, "scan tickets for this event")?;

        if ticket.is_scanned {
            return Err(TicketingError::already_scanned());
        }
        if self.ticket_to_listing.contains_key(&ticket_id) {
            return Err(TicketingError::StateConflict(
                "Ticket is held in marketplace escrow; cancel the listing first".into(),
            ));
        }
        if now < event.event_date {
            return Err(TicketingError::StateConflict(
                "Event has not started: scanning opens at the event date".into(),
            ));
        }
        // A window end past u64::MAX never closes.
        let window_end = event.event_date.checked_add(SCAN_WINDOW_NS);
        if window_end.is_some_and(|end| now > end) {
            return Err(TicketingError::StateConflict(
                "Scan window closed: scanning ends 24h after the event date".into(),
            ));
        }

        let event_id = ticket.event_id;
        let owner_id = ticket.owner_id.clone();
        let mut ticket = ticket;
        ticket.is_scanned = true;
        self.tickets_by_id.insert(ticket_id, ticket);

        // A scanned ticket is permanently non-transferable via resale, so any
        // standing approval is dead; drop it.
        if self.resale_approvals.remove(&ticket_id).is_some() {
            events::emit_resale_cancelled(&owner_id, ticket_id);
        }

        self.record_ticket_scanned(actor_id);
        events::emit_ticket_scanned(actor_id, ticket_id, event_id, &owner_id);
        Ok(())
    }

    pub(crate) fn internal_transform_ticket(
        &mut self,
        actor_id: &AccountId,
        ticket_id: u64,
        new_metadata_ref: String,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;

        crate::validation::validate_metadata_ref(&new_metadata_ref)?;

        let ticket = self
            .tickets_by_id
            .get(&ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(ticket_id))?
            .clone();
        let event = self
            .events_by_id
            .get(&ticket.event_id)
            .ok_or_else(|| TicketingError::event_not_found(ticket.event_id))?;
        self.check_event_creator(actor_id, event, "transform tickets for this event")?;

        if !event.completed {
            return Err(TicketingError::StateConflict(
                "Event must be completed before tickets can be transformed".into(),
            ));
        }
        if !ticket.is_scanned {
            return Err(TicketingError::StateConflict(
                "Only scanned tickets can be transformed".into(),
            ));
        }
        if ticket.is_transformed {
            return Err(TicketingError::StateConflict(
                "Ticket has already been transformed".into(),
            ));
        }

        let event_id = ticket.event_id;
        let mut ticket = ticket;
        ticket.is_transformed = true;
        ticket.metadata_ref = new_metadata_ref.clone();
        self.tickets_by_id.insert(ticket_id, ticket);

        self.record_ticket_transformed(actor_id);
        events::emit_ticket_transformed(actor_id, ticket_id, event_id, &new_metadata_ref);
        Ok(())
    }
}
