//! Pagination Controls Component

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

/// Numbered page links; clicking one loads that page
#[component]
pub fn PaginationControls() -> impl IntoView {
    let ctx = use_dashboard();

    let controls = move || {
        ctx.store.pages().get().into_iter().map(|control| {
            let number = control.number;
            view! {
                <li class=if control.active { "page-item active" } else { "page-item" }>
                    <a
                        class="page-link"
                        href="#"
                        data-page=number.to_string()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.load_page(number);
                        }
                    >
                        {number}
                    </a>
                </li>
            }
        }).collect_view()
    };

    view! {
        <nav aria-label="Issue pages">
            <ul class="pagination" id="paginationControls">{controls}</ul>
        </nav>
    }
}
