//! Authentication API service

use crate::auth::Session;
use crate::client::{authenticated_client, public_client, token_store};
use campus_core::types::{LoginRequest, RegisterRequest};
use campus_http::ClientError;

/// Authentication API service
#[derive(Clone)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Exchange credentials for a session. Persists the issued token pair
    /// before returning.
    pub async fn sign_in(&self, email: String, password: String) -> Result<Session, ClientError> {
        let client = public_client()?;
        let response = client.login(&LoginRequest { email, password }).await?;
        token_store().set_tokens(&response.access_token, &response.refresh_token);
        Ok(Session::from_profile(response.user))
    }

    /// Create an account. A successful registration signs the user in.
    pub async fn sign_up(
        &self,
        full_name: String,
        email: String,
        password: String,
    ) -> Result<Session, ClientError> {
        let client = public_client()?;
        let response = client
            .register(&RegisterRequest {
                full_name,
                email,
                password,
            })
            .await?;
        token_store().set_tokens(&response.access_token, &response.refresh_token);
        Ok(Session::from_profile(response.user))
    }

    /// Re-derive the session from the profile endpoint.
    pub async fn fetch_session(&self) -> Result<Session, ClientError> {
        let client = authenticated_client()?;
        let profile = client.profile().await?;
        Ok(Session::from_profile(profile))
    }

    /// Invalidate the session server-side, best effort. Local state is
    /// cleared by the auth reducer regardless of the outcome.
    pub async fn sign_out(&self) {
        if let Ok(client) = authenticated_client() {
            if let Err(error) = client.logout().await {
                tracing::debug!(%error, "server-side logout failed");
            }
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
