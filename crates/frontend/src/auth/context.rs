//! Global authentication context and provider

use crate::client;
use crate::services::auth::AuthService;
use campus_core::Role;
use campus_core::types::UserProfile;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// In-memory session for the lifetime of the page. Re-derived on reload from
/// the profile endpoint, replaced wholesale, never mutated field by field.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    pub roles: Vec<Role>,
}

impl Session {
    pub fn from_profile(user: UserProfile) -> Self {
        Self {
            roles: user.roles.clone(),
            user,
        }
    }
}

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub session: Option<Session>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Authentication context actions
pub enum AuthAction {
    /// A login or registration completed; tokens are already persisted.
    SignedIn(Session),
    /// Session hydration finished, with or without a session.
    SessionResolved(Option<Session>),
    Logout,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            session: None,
            is_loading: true, // Start loading until storage has been consulted
            error: None,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignedIn(session) => Rc::new(Self {
                session: Some(session),
                is_loading: false,
                error: None,
            }),
            AuthAction::SessionResolved(session) => Rc::new(Self {
                session,
                is_loading: false,
                error: None,
            }),
            AuthAction::Logout => {
                // Destroy the persisted credential pair along with the
                // in-memory session.
                client::token_store().clear();

                Rc::new(Self {
                    session: None,
                    is_loading: false,
                    error: None,
                })
            }
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(AuthContextData::default);

    // Hydrate the session on mount: a profile fetch gated on the presence of
    // an access token. No token means resolution completes immediately.
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            if client::token_store().access_token().is_none() {
                auth.dispatch(AuthAction::SessionResolved(None));
            } else {
                spawn_local(async move {
                    match AuthService::new().fetch_session().await {
                        Ok(session) => {
                            auth.dispatch(AuthAction::SessionResolved(Some(session)));
                        }
                        Err(error) => {
                            tracing::warn!(%error, "session hydration failed");
                            if error.is_auth_expired() {
                                client::token_store().clear();
                            }
                            auth.dispatch(AuthAction::SessionResolved(None));
                        }
                    }
                });
            }
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.session.is_some()
}
