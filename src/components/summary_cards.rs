//! Summary Cards Component
//!
//! Total / pending / resolved issue counts.

use leptos::prelude::*;

use crate::models::IssueCounts;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Card text for one count; a dash until counts have loaded
fn count_text(counts: Option<IssueCounts>, pick: fn(&IssueCounts) -> u64) -> String {
    counts
        .map(|c| pick(&c).to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
fn SummaryCard(
    /// Bootstrap background class, e.g. "bg-primary"
    background: &'static str,
    label: &'static str,
    pick: fn(&IssueCounts) -> u64,
) -> impl IntoView {
    let store = use_dashboard_store();
    let value = move || count_text(store.counts().get(), pick);

    view! {
        <div class="col-md-4">
            <div class=format!("card text-white {}", background)>
                <div class="card-body">
                    <h5 class="card-title">{value}</h5>
                    <p class="card-text">{label}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SummaryCards() -> impl IntoView {
    view! {
        <div class="row summary-cards">
            <SummaryCard background="bg-primary" label="Total Issues" pick=|c| c.total_issues />
            <SummaryCard background="bg-warning" label="Pending Issues" pick=|c| c.pending_issues />
            <SummaryCard background="bg-success" label="Resolved Issues" pick=|c| c.resolved_issues />
        </div>
    }
}
