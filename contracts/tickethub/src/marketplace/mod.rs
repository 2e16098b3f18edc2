mod listing;
mod purchase;
mod types;
mod views;

pub use types::Listing;
