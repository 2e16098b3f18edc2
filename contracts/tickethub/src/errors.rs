use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum TicketingError {
    InvalidInput(String),
    NotFound(String),
    Unauthorized(String),
    StateConflict(String),
    PaymentMismatch(String),
    PaymentOutOfBounds(String),
    DuplicateResource(String),
    Internal(String),
}

impl std::fmt::Display for TicketingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::StateConflict(msg) => write!(f, "State conflict: {}", msg),
            Self::PaymentMismatch(msg) => write!(f, "Payment mismatch: {}", msg),
            Self::PaymentOutOfBounds(msg) => write!(f, "Payment out of bounds: {}", msg),
            Self::DuplicateResource(msg) => write!(f, "Duplicate resource: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl TicketingError {
    pub fn event_not_found(event_id: u64) -> Self {
        Self::NotFound(format!("Event {} not found", event_id))
    }
    pub fn ticket_not_found(ticket_id: u64) -> Self {
        Self::NotFound(format!("Ticket {} not found", ticket_id))
    }
    pub fn listing_not_found(listing_id: u64) -> Self {
        Self::NotFound(format!("Listing {} not found", listing_id))
    }
    pub fn only_creator(what: &str) -> Self {
        Self::Unauthorized(format!("Only the event creator can {}", what))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn event_not_active() -> Self {
        Self::StateConflict("Event is not active".into())
    }
    pub fn event_completed() -> Self {
        Self::StateConflict("Event is already completed".into())
    }
    pub fn event_started() -> Self {
        Self::StateConflict("Event has already started".into())
    }
    pub fn already_scanned() -> Self {
        Self::StateConflict("Ticket has already been scanned".into())
    }
    pub fn counter_overflow(what: &str) -> Self {
        Self::Internal(format!("{} counter overflow", what))
    }
}
