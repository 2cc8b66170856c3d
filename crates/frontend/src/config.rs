//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Items per page for catalog listings
    pub const DEFAULT_PAGE_SIZE: usize = 12;
}
