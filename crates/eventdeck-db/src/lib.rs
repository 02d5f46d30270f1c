//! EventDeck database layer
//!
//! Postgres-backed event record store.

pub mod db;

pub use db::{EventRepository, EventStore};
