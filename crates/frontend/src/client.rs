//! Client configuration and initialization

use campus_http::{AuthCampusClient, CampusClientBuilder, ClientError, PublicCampusClient, TokenStore};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
use web_sys::window;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicCampusClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<AuthCampusClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// The credential store shared by the clients and the auth provider.
#[cfg(target_arch = "wasm32")]
pub fn token_store() -> Arc<dyn TokenStore> {
    Arc::new(campus_http::BrowserTokenStore)
}

/// Non-browser builds (tests, server-side rendering) share one in-memory pair.
#[cfg(not(target_arch = "wasm32"))]
pub fn token_store() -> Arc<dyn TokenStore> {
    static STORE: Lazy<Arc<campus_http::MemoryTokenStore>> =
        Lazy::new(|| Arc::new(campus_http::MemoryTokenStore::new()));
    let store: Arc<campus_http::MemoryTokenStore> = Arc::clone(&STORE);
    store
}

/// Get the public client instance (for login/register endpoints)
pub fn public_client() -> Result<PublicCampusClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if client_lock.is_none() {
        let client = CampusClientBuilder::new()
            .base_url(get_base_url())
            .build_public()?;
        *client_lock = Some(client.clone());
        Ok(client)
    } else {
        Ok(client_lock
            .as_ref()
            .expect("Public client should be initialized")
            .clone())
    }
}

/// Get the authenticated client instance.
///
/// One instance serves the whole session lifecycle: it reads the credential
/// store at send time, so login, refresh, and logout need no rebuild.
pub fn authenticated_client() -> Result<AuthCampusClient, ClientError> {
    let mut client_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if client_lock.is_none() {
        let client = CampusClientBuilder::new()
            .base_url(get_base_url())
            .build_authenticated(token_store())?;
        *client_lock = Some(client.clone());
        Ok(client)
    } else {
        Ok(client_lock
            .as_ref()
            .expect("Auth client should be initialized")
            .clone())
    }
}
