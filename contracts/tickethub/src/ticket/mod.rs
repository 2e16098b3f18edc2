mod purchase;
mod transfer;
mod types;
mod views;

pub use types::Ticket;
