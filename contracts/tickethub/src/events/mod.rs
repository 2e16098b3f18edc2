mod builder;
mod types;

mod contract;
mod metrics;
mod registry;
mod sale;
mod ticket;

pub use contract::*;
pub use metrics::*;
pub use registry::*;
pub use sale::*;
pub use ticket::*;

pub(crate) const STANDARD: &str = "tickethub";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const EVENT: &str = "EVENT_UPDATE";
pub(crate) const TICKET: &str = "TICKET_UPDATE";
pub(crate) const SALE: &str = "SALE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
pub(crate) const METRIC: &str = "METRIC";
