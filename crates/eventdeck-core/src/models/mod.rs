pub mod asset;
pub mod auth;
pub mod event;

pub use asset::StoredAsset;
pub use auth::{LoginRequest, LoginResponse};
pub use event::{
    EventEnvelope, EventFields, EventRecord, MessageResponse, NewEvent, UpdatedEvent,
};
