//! Navigation Bar Component
//!
//! Brand logos, page links and the theme switch.

use leptos::prelude::*;

use crate::components::ThemeSwitcher;
use crate::nav::{active_flags, current_location, NAV_LINKS};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::theme::{logo_display, ThemeAppearance};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_dashboard_store();
    let appearance = move || ThemeAppearance::from(store.theme().get());

    // Computed once: every link is a full page load
    let flags = current_location()
        .map(|location| active_flags(&location, NAV_LINKS))
        .unwrap_or_else(|| vec![false; NAV_LINKS.len()]);

    view! {
        <nav class="navbar navbar-expand-lg">
            <a class="navbar-brand" href="/dashboard">
                <img
                    class="logo-light"
                    src="/static/images/logo-light.png"
                    alt="HelpDesk"
                    style:display=move || logo_display(appearance().light_logo_visible)
                />
                <img
                    class="logo-dark"
                    src="/static/images/logo-dark.png"
                    alt="HelpDesk"
                    style:display=move || logo_display(appearance().dark_logo_visible)
                />
            </a>
            <ul class="navbar-nav">
                {NAV_LINKS.iter().zip(flags).map(|(link, active)| view! {
                    <li class="nav-item">
                        <a class=if active { "nav-link active" } else { "nav-link" } href=link.href>
                            {link.label}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
            <ThemeSwitcher />
        </nav>
    }
}
