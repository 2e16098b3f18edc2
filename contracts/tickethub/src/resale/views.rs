use crate::*;

#[near]
impl Contract {
    /// The standing direct-resale approval for a ticket, if any.
    pub fn get_resale_approval(&self, ticket_id: u64) -> Option<ResaleApproval> {
        self.resale_approvals.get(&ticket_id).cloned()
    }
}
