mod approval;
mod types;
mod views;

pub use types::ResaleApproval;

use crate::*;

impl Contract {
    /// Shared gate for both resale paths: the event must still be upcoming and
    /// sellable, and the ticket must never have been scanned.
    pub(crate) fn check_ticket_resalable(
        &self,
        event: &Event,
        ticket: &Ticket,
        now: u64,
    ) -> Result<(), TicketingError> {
        if !event.is_active {
            return Err(TicketingError::event_not_active());
        }
        if event.completed {
            return Err(TicketingError::event_completed());
        }
        if now >= event.event_date {
            return Err(TicketingError::event_started());
        }
        if ticket.is_scanned {
            return Err(TicketingError::already_scanned());
        }
        Ok(())
    }
}
