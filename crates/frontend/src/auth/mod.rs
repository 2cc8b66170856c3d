//! Authentication context and route guarding.

pub mod context;
pub mod guard;

pub use context::{
    AuthAction, AuthContext, AuthContextData, AuthProvider, Session, use_auth, use_is_authenticated,
};
pub use guard::RequireAuth;
