//! Shared UI components

pub mod empty_state;
pub mod navbar;
pub mod pagination;
pub mod spinner;

pub use empty_state::EmptyState;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use spinner::LoadingSpinner;
