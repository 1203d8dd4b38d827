//! Dashboard Context
//!
//! Handle provided to all components via the Leptos Context API. Event
//! handlers go through it to reach the controller and the theme settings.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpIssueApi;
use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::filter::FilterQuery;
use crate::render::StoreView;
use crate::store::{DashboardStateStoreFields, DashboardStore};
use crate::theme::{apply_document_theme, BrowserStorage, ThemeSettings};

pub type Dashboard = DashboardController<HttpIssueApi, StoreView>;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Controller, kept on the UI thread
    controller: StoredValue<Rc<Dashboard>, LocalStorage>,
    theme: StoredValue<ThemeSettings<BrowserStorage>, LocalStorage>,
    pub store: DashboardStore,
}

impl DashboardContext {
    pub fn new(
        config: &DashboardConfig,
        store: DashboardStore,
        theme: ThemeSettings<BrowserStorage>,
    ) -> Self {
        let controller = DashboardController::new(
            HttpIssueApi::new(config),
            StoreView::new(store),
            config.items_per_page,
        );
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            theme: StoredValue::new_local(theme),
            store,
        }
    }

    /// Pager click
    pub fn load_page(&self, page: u32) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.fetch_and_display_issues(Some(page)).await;
        });
    }

    /// Reload page 1 and the counts
    pub fn refresh(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.refresh().await;
        });
    }

    /// Theme switch change
    pub fn set_theme(&self, dark: bool) {
        let preference = self.theme.with_value(|settings| settings.toggle(dark));
        apply_document_theme(preference);
        *self.store.theme().write() = preference;
    }

    /// Filter input change
    pub fn set_filter(&self, raw: &str) {
        *self.store.filter().write() = FilterQuery::new(raw);
    }
}

pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
