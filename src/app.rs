//! Helpdesk Dashboard App
//!
//! Root component: restores the theme, wires the context and kicks off the
//! initial loads.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{IssuesTable, IssuesToolbar, NavBar, PaginationControls, SummaryCards};
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::store::DashboardState;
use crate::theme::{apply_document_theme, BrowserStorage, ThemeSettings};

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default();

    // Restore the stored theme without writing it back
    let theme = ThemeSettings::new(BrowserStorage, config.theme_key.clone());
    let initial_theme = theme.load();
    if let Some(preference) = initial_theme {
        apply_document_theme(preference);
    }

    let store = Store::new(DashboardState::new(initial_theme.unwrap_or_default()));
    provide_context(store);

    let ctx = DashboardContext::new(&config, store, theme);
    provide_context(ctx);

    // Initial load: first page and counts, same as a refresh
    Effect::new(move |_| {
        log::info!("Loading dashboard");
        ctx.refresh();
    });

    view! {
        <NavBar />
        <main class="container dashboard">
            <SummaryCards />
            <section class="card issues-card">
                <div class="card-header">
                    <h5>"Recent Issues"</h5>
                    <IssuesToolbar />
                </div>
                <div class="card-body">
                    <IssuesTable />
                </div>
                <div class="card-footer">
                    <PaginationControls />
                </div>
            </section>
        </main>
    }
}
