//! UI Components
//!
//! Leptos components making up the dashboard page.

mod nav_bar;
mod theme_switcher;
mod summary_cards;
mod issues_table;
mod issues_toolbar;
mod pagination_controls;

pub use nav_bar::NavBar;
pub use theme_switcher::ThemeSwitcher;
pub use summary_cards::SummaryCards;
pub use issues_table::IssuesTable;
pub use issues_toolbar::IssuesToolbar;
pub use pagination_controls::PaginationControls;
