//! Shared domain types for the Campus learning platform frontend.
//!
//! This crate is deliberately free of any browser or HTTP dependency so the
//! access policy and envelope handling can be unit tested natively.

pub mod access;
pub mod envelope;
pub mod role;
pub mod types;

pub use access::Access;
pub use envelope::{ApiEnvelope, ApiErrorBody};
pub use role::Role;
