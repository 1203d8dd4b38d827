#![allow(warnings)]
//! Helpdesk Dashboard Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod filter;
mod logging;
mod models;
mod nav;
mod pagination;
mod render;
mod store;
mod theme;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(DashboardConfig::default().log_level);
    mount_to_body(App);
}
