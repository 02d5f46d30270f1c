//! Database repositories for data access layer
//
// Event records (the "cards" shown in the feed)
pub mod event;

pub use event::{EventRepository, EventStore};
