//! Campus API clients.
//!
//! [`PublicCampusClient`] talks to the unauthenticated auth endpoints.
//! [`AuthCampusClient`] is the interceptor: it attaches the persisted bearer
//! credential to every request, unwraps the uniform response envelope, and on
//! a 401 performs at most one token refresh before re-issuing the original
//! request. Concurrent 401s share a single in-flight refresh.

use crate::error::ClientError;
use crate::token_store::TokenStore;
use campus_core::envelope::{ApiEnvelope, ApiErrorBody};
use campus_core::types::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    UserProfile,
};
use futures::lock::Mutex;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = "campus-frontend/0.1.0";

/// Credential exchange endpoint. Requests to it never carry a bearer header
/// and are never themselves retried through the refresh path.
pub const REFRESH_PATH: &str = "/auth/refresh-token";

fn build_http(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(ClientError::from)?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::from)?
    };

    Ok(client)
}

/// Turn a non-success response into a [`ClientError`], preferring the message
/// carried in the response envelope over the raw body.
async fn response_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| status.to_string());
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map(|error| error.message)
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.to_string()
            } else {
                body
            }
        });
    ClientError::from_status(status, message)
}

async fn unwrap_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if response.status().is_success() {
        let envelope: ApiEnvelope<T> = response.json().await?;
        envelope.into_result().map_err(ClientError::Api)
    } else {
        Err(response_error(response).await)
    }
}

/// Client for endpoints that don't require authentication.
#[derive(Clone)]
pub struct PublicCampusClient {
    client: Client,
    base_url: String,
}

impl PublicCampusClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        CampusClientBuilder::new().base_url(base_url).build_public()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and unwrap the response envelope
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(ClientError::from)?;
        unwrap_envelope(response).await
    }

    /// Exchange credentials for a token pair and profile.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/login").json(request);
        self.execute(request).await
    }

    /// Create an account; a successful registration also signs the user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/register").json(request);
        self.execute(request).await
    }
}

/// Guarded by the refresh mutex: the epoch moves forward once per committed
/// refresh, letting requests that failed against an older token detect that
/// a newer one is already available.
#[derive(Debug, Default)]
struct RefreshState {
    epoch: u64,
}

/// Client for authenticated endpoints.
///
/// The bearer credential is read from the injected [`TokenStore`] at send
/// time, so one client instance survives login, refresh, and logout.
#[derive(Clone)]
pub struct AuthCampusClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    refresh: Arc<Mutex<RefreshState>>,
}

impl AuthCampusClient {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, ClientError> {
        CampusClientBuilder::new()
            .base_url(base_url)
            .build_authenticated(tokens)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The injected credential store.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Create a request builder. The bearer credential is attached by
    /// [`execute`](Self::execute), not here, so a retried request picks up
    /// the refreshed token.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Create a request builder with a per-request deadline. A deadline
    /// failure surfaces as [`ClientError::Timeout`] and is not treated as an
    /// authentication failure.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn request_with_deadline(
        &self,
        method: Method,
        path: &str,
        deadline: Duration,
    ) -> reqwest::RequestBuilder {
        self.request(method, path).timeout(deadline)
    }

    /// Execute a request and unwrap the response envelope, refreshing the
    /// access token once if the request comes back 401.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send_with_refresh(request).await?;
        let envelope: ApiEnvelope<T> = response.json().await?;
        envelope.into_result().map_err(ClientError::Api)
    }

    /// Execute a request whose successful envelope carries no payload.
    pub async fn execute_unit(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let response = self.send_with_refresh(request).await?;
        let envelope: ApiEnvelope<serde_json::Value> = response.json().await?;
        if envelope.is_success {
            Ok(())
        } else {
            Err(ClientError::Api(
                envelope.error.unwrap_or_else(ApiErrorBody::generic),
            ))
        }
    }

    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let request = self.request(Method::GET, "/auth/profile");
        self.execute(request).await
    }

    /// Invalidate the session server-side.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/auth/logout");
        self.execute_unit(request).await
    }

    /// Send a request with bearer injection and at most one refresh-retry.
    ///
    /// The attempt counter is threaded explicitly through the loop; nothing
    /// is mutated on the request itself. The epoch snapshot taken alongside
    /// the bearer lets [`refresh_access_token`](Self::refresh_access_token)
    /// skip the network call when a concurrent request already refreshed.
    async fn send_with_refresh(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let mut attempt: u8 = 0;
        loop {
            let (epoch, bearer) = self.credential_snapshot().await;
            let attempt_request = request.try_clone().ok_or_else(|| {
                ClientError::Configuration("request body cannot be replayed".into())
            })?;
            let attempt_request = match &bearer {
                Some(token) => attempt_request.bearer_auth(token),
                None => attempt_request,
            };

            let response = attempt_request.send().await.map_err(ClientError::from)?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED && attempt == 0 {
                // Keep the original failure: if the refresh cannot help, it
                // is what propagates to the caller.
                let original = response_error(response).await;
                attempt += 1;
                match self.refresh_access_token(epoch).await {
                    Ok(()) => {
                        tracing::debug!("access token refreshed, re-issuing request");
                        continue;
                    }
                    Err(error) => {
                        tracing::debug!(%error, "token refresh failed");
                        return Err(original);
                    }
                }
            }

            if status.is_success() {
                return Ok(response);
            }
            return Err(response_error(response).await);
        }
    }

    /// Read the refresh epoch and the current bearer as one consistent pair.
    async fn credential_snapshot(&self) -> (u64, Option<String>) {
        let state = self.refresh.lock().await;
        (state.epoch, self.tokens.access_token())
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Runs under the refresh mutex. If the epoch moved past the caller's
    /// snapshot, another request already refreshed within this window and no
    /// second exchange is issued.
    async fn refresh_access_token(&self, observed_epoch: u64) -> Result<(), ClientError> {
        let mut state = self.refresh.lock().await;
        if state.epoch != observed_epoch {
            return Ok(());
        }

        let Some(refresh_token) = self.tokens.refresh_token() else {
            return Err(ClientError::AuthenticationFailed(
                "no refresh token available".into(),
            ));
        };

        let body = RefreshTokenRequest {
            access_token: self.tokens.access_token(),
            refresh_token,
        };
        let url = format!("{}{}", self.base_url, REFRESH_PATH);
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from)?;
        let refreshed: RefreshTokenResponse = unwrap_envelope(response).await?;

        self.tokens.set_access_token(&refreshed.access_token);
        state.epoch += 1;
        Ok(())
    }
}

/// Builder that creates the appropriate client type.
#[derive(Default)]
pub struct CampusClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CampusClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the default request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn base_url_or_err(&self) -> Result<String, ClientError> {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicCampusClient, ClientError> {
        let base_url = self.base_url_or_err()?;
        Ok(PublicCampusClient {
            client: build_http(self.timeout)?,
            base_url,
        })
    }

    /// Build an authenticated client around an injected token store
    pub fn build_authenticated(
        self,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<AuthCampusClient, ClientError> {
        let base_url = self.base_url_or_err()?;
        Ok(AuthCampusClient {
            client: build_http(self.timeout)?,
            base_url,
            tokens,
            refresh: Arc::new(Mutex::new(RefreshState::default())),
        })
    }
}
