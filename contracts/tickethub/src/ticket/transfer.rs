use crate::guards::hash_account_id;
use crate::*;

impl Contract {
    // Owner index mutation follows remove-modify-reinsert so the inner set's
    // storage prefix stays tied to the owning account.
    pub(crate) fn add_ticket_to_owner(&mut self, account_id: &AccountId, ticket_id: u64) {
        let mut owned = self.tickets_per_owner.remove(account_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::TicketsPerOwnerInner {
                account_hash: hash_account_id(account_id),
            })
        });
        owned.insert(ticket_id);
        self.tickets_per_owner.insert(account_id.clone(), owned);
    }

    pub(crate) fn remove_ticket_from_owner(&mut self, account_id: &AccountId, ticket_id: u64) {
        if let Some(mut owned) = self.tickets_per_owner.remove(account_id) {
            owned.remove(&ticket_id);
            if !owned.is_empty() {
                self.tickets_per_owner.insert(account_id.clone(), owned);
            }
        }
    }

    pub(crate) fn add_ticket_to_event(&mut self, event_id: u64, ticket_id: u64) {
        let mut issued = self.tickets_per_event.remove(&event_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::TicketsPerEventInner { event_id })
        });
        issued.insert(ticket_id);
        self.tickets_per_event.insert(event_id, issued);
    }

    /// Atomic ownership swap: the only way a ticket changes hands. Clears any
    /// outstanding direct-resale approval, which is void once the owner changes.
    pub(crate) fn internal_transfer_ticket(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        ticket_id: u64,
        memo: &str,
    ) -> Result<(), TicketingError> {
        let mut ticket = self
            .tickets_by_id
            .get(&ticket_id)
            .ok_or_else(|| TicketingError::ticket_not_found(ticket_id))?
            .clone();

        if &ticket.owner_id != from {
            return Err(TicketingError::StateConflict(
                "Ticket ownership changed since the operation began".into(),
            ));
        }

        self.remove_ticket_from_owner(from, ticket_id);
        ticket.owner_id = to.clone();
        self.add_ticket_to_owner(to, ticket_id);
        self.tickets_by_id.insert(ticket_id, ticket);

        self.resale_approvals.remove(&ticket_id);

        events::emit_ticket_transferred(from, to, ticket_id, memo);
        Ok(())
    }
}
