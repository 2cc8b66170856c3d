//! API services

pub mod auth;
pub mod catalog;
pub mod dashboard;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
