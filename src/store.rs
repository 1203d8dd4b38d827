//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::FilterQuery;
use crate::models::{IssueCounts, ThemePreference};
use crate::pagination::PageControl;
use crate::render::IssueRow;

/// Everything the dashboard components render from
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Rows of the page currently shown
    pub rows: Vec<IssueRow>,
    /// Pager controls for the page currently shown
    pub pages: Vec<PageControl>,
    /// None until the first counts load succeeds
    pub counts: Option<IssueCounts>,
    pub filter: FilterQuery,
    pub theme: ThemePreference,
}

impl DashboardState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}
