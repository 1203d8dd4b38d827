//! Theme Switch Component

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;
use crate::theme::ThemeAppearance;

/// Light/dark checkbox; checked means dark
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ctx = use_dashboard();
    let checked = move || ThemeAppearance::from(ctx.store.theme().get()).toggle_checked;

    view! {
        <div class="theme-switch-wrapper">
            <label class="theme-switch" for="themeSwitcher">
                <input
                    type="checkbox"
                    id="themeSwitcher"
                    prop:checked=checked
                    on:change=move |ev| ctx.set_theme(event_target_checked(&ev))
                />
                <div class="slider round"></div>
            </label>
        </div>
    }
}
