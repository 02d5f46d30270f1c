pub mod middleware;

pub use middleware::{admin_gate_middleware, secure_compare};
