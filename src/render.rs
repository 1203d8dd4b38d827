//! Rendering Interface
//!
//! What the controller can do to the page, and the store-backed
//! implementation the Leptos components observe.

use leptos::prelude::*;

use crate::models::{Issue, IssueCounts};
use crate::pagination::PageControl;
use crate::store::{DashboardStateStoreFields, DashboardStore};

/// Table header labels, in column order
pub const ISSUE_COLUMNS: [&str; 7] = [
    "Submitted At",
    "User",
    "Issue Type",
    "Description",
    "Reproduce",
    "Log",
    "Status",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub class: &'static str,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    pub submitted_at: String,
    pub user: String,
    pub issue_type: String,
    pub description: String,
    pub reproduce: String,
    pub log: String,
    pub status: StatusBadge,
}

impl IssueRow {
    /// The six text cells preceding the status badge, in table order
    pub fn text_cells(&self) -> [&str; 6] {
        [
            self.submitted_at.as_str(),
            self.user.as_str(),
            self.issue_type.as_str(),
            self.description.as_str(),
            self.reproduce.as_str(),
            self.log.as_str(),
        ]
    }
}

impl From<&Issue> for IssueRow {
    fn from(issue: &Issue) -> Self {
        Self {
            submitted_at: issue.submitted_at.clone(),
            user: issue.user_id.clone().unwrap_or_default(),
            issue_type: issue.issue_type.clone(),
            description: issue.description.clone(),
            reproduce: issue.reproduce.clone().unwrap_or_default(),
            log: issue.log.clone().unwrap_or_default(),
            status: StatusBadge {
                label: issue.status.as_str().to_string(),
                class: issue.status.badge_class(),
            },
        }
    }
}

/// Page mutations the controller performs
pub trait DashboardView {
    /// Replace the table body
    fn render_issue_rows(&self, rows: Vec<IssueRow>);
    /// Replace the pager
    fn render_pagination(&self, controls: Vec<PageControl>);
    fn render_counts(&self, counts: IssueCounts);
    /// Blocking user-visible notification
    fn notify_error(&self, message: &str);
}

/// Writes into the dashboard store; components re-render from it
#[derive(Clone, Copy)]
pub struct StoreView {
    store: DashboardStore,
}

impl StoreView {
    pub fn new(store: DashboardStore) -> Self {
        Self { store }
    }
}

impl DashboardView for StoreView {
    fn render_issue_rows(&self, rows: Vec<IssueRow>) {
        *self.store.rows().write() = rows;
    }

    fn render_pagination(&self, controls: Vec<PageControl>) {
        *self.store.pages().write() = controls;
    }

    fn render_counts(&self, counts: IssueCounts) {
        *self.store.counts().write() = Some(counts);
    }

    fn notify_error(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("Failed to show notification: {:?}", e);
            }
        }
    }
}
