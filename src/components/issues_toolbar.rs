//! Issues Toolbar Component
//!
//! Refresh button and description filter above the issues table.

use leptos::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn IssuesToolbar() -> impl IntoView {
    let ctx = use_dashboard();

    view! {
        <div class="issues-toolbar">
            <input
                type="text"
                id="filterInput"
                class="form-control"
                placeholder="Filter by description..."
                on:input=move |ev| ctx.set_filter(&event_target_value(&ev))
            />
            <button
                id="refreshButton"
                class="btn btn-outline-secondary"
                title="Refresh"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.refresh();
                }
            >
                "⟳"
            </button>
        </div>
    }
}
