//! Campus HTTP client layer.
//!
//! Calling code builds requests against [`client::AuthCampusClient`] and never
//! touches token plumbing: the client injects the bearer credential from the
//! injected [`token_store::TokenStore`] and transparently performs a single,
//! deduplicated refresh when a request comes back 401.

pub mod client;
pub mod error;
pub mod token_store;

pub use client::{AuthCampusClient, CampusClientBuilder, PublicCampusClient};
pub use error::ClientError;
pub use token_store::{MemoryTokenStore, TokenStore};

#[cfg(target_arch = "wasm32")]
pub use token_store::BrowserTokenStore;
