//! Campus learning platform web UI.

pub mod app;
pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod services;

pub use app::App;
pub use auth::{AuthContext, AuthProvider, RequireAuth};
pub use routes::Route;
