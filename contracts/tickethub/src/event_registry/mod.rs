mod manage;
mod types;
mod views;

pub use types::{Event, EventConfig};
