use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod fees;

mod attendance;
mod event_registry;
mod marketplace;
mod resale;
mod ticket;

mod admin;
mod analytics;


pub use admin::PlatformConfig;
pub use analytics::PlatformStats;
pub use constants::*;
pub use errors::TicketingError;
pub use event_registry::{Event, EventConfig};
pub use marketplace::Listing;
pub use resale::ResaleApproval;
pub use ticket::Ticket;

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    Events,
    Tickets,
    TicketsPerOwner,
    TicketsPerOwnerInner { account_hash: Vec<u8> },
    TicketsPerEvent,
    TicketsPerEventInner { event_id: u64 },
    Listings,
    TicketToListing,
    UsedQrHashes,
    ResaleApprovals,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    pub treasury_id: AccountId,
    pub emergency_admin_id: AccountId,
    pub paused: bool,

    // Sequence invariant: ids are monotonic, assigned once, never reused.
    pub next_event_id: u64,
    pub next_ticket_id: u64,
    pub next_listing_id: u64,

    pub events_by_id: IterableMap<u64, Event>,
    pub tickets_by_id: IterableMap<u64, Ticket>,
    pub(crate) tickets_per_owner: LookupMap<AccountId, IterableSet<u64>>,
    pub(crate) tickets_per_event: LookupMap<u64, IterableSet<u64>>,

    pub listings_by_id: IterableMap<u64, Listing>,
    // Listing invariant: at most one active listing per ticket; this reverse
    // index exists exactly while that listing is active.
    pub(crate) ticket_to_listing: LookupMap<u64, u64>,

    // Append-only registry: a QR hash consumed by any mint stays consumed for
    // the life of the contract, across all events.
    pub(crate) used_qr_hashes: IterableSet<String>,

    pub(crate) resale_approvals: LookupMap<u64, ResaleApproval>,

    pub stats: PlatformStats,
}

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, treasury_id: AccountId, emergency_admin_id: AccountId) -> Self {
        Self {
            owner_id,
            treasury_id,
            emergency_admin_id,
            paused: false,
            next_event_id: 0,
            next_ticket_id: 0,
            next_listing_id: 0,
            events_by_id: IterableMap::new(StorageKey::Events),
            tickets_by_id: IterableMap::new(StorageKey::Tickets),
            tickets_per_owner: LookupMap::new(StorageKey::TicketsPerOwner),
            tickets_per_event: LookupMap::new(StorageKey::TicketsPerEvent),
            listings_by_id: IterableMap::new(StorageKey::Listings),
            ticket_to_listing: LookupMap::new(StorageKey::TicketToListing),
            used_qr_hashes: IterableSet::new(StorageKey::UsedQrHashes),
            resale_approvals: LookupMap::new(StorageKey::ResaleApprovals),
            stats: PlatformStats::default(),
        }
    }
}
