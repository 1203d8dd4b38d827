//! Dashboard Configuration
//!
//! Endpoint paths, page size and storage key used by the dashboard.

use log::LevelFilter;

/// Issues shown per table page
pub const ITEMS_PER_PAGE: u32 = 5;

/// localStorage key holding "dark" or "light"
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub counts_endpoint: String,
    pub issues_endpoint: String,
    pub items_per_page: u32,
    pub theme_key: String,
    pub log_level: LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            counts_endpoint: "/get-issue-counts".to_string(),
            issues_endpoint: "/get-issues".to_string(),
            items_per_page: ITEMS_PER_PAGE,
            theme_key: THEME_STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
