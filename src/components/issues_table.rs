//! Issues Table Component
//!
//! Renders the current page's rows; the filter hides rows in place.

use leptos::prelude::*;

use crate::filter::row_display;
use crate::render::ISSUE_COLUMNS;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn IssuesTable() -> impl IntoView {
    let store = use_dashboard_store();

    let rows = move || {
        store.rows().get().into_iter().map(|row| {
            let description = row.description.clone();
            let display = move || store.filter().with(|query| row_display(query, &description));
            let cells = row.text_cells().map(str::to_string);
            let badge_class = format!("badge {}", row.status.class);

            view! {
                <tr style:display=display>
                    {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                    <td><span class=badge_class>{row.status.label}</span></td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <div class="table-responsive">
            <table class="table table-striped" id="issuesTable">
                <thead>
                    <tr>
                        {ISSUE_COLUMNS.iter().map(|column| view! { <th scope="col">{*column}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
