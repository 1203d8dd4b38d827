//! Navigation Highlighting
//!
//! Decides which navbar link points at the page currently loaded.

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Pages served by the backend
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Dashboard",
        href: "/dashboard",
    },
    NavLink {
        label: "Analytics",
        href: "/analytics",
    },
    NavLink {
        label: "Settings",
        href: "/settings",
    },
];

/// One flag per link: true when the link's resolved path equals the path of
/// `location`. An unparsable location marks nothing active.
pub fn active_flags(location: &str, links: &[NavLink]) -> Vec<bool> {
    let Ok(current) = Url::parse(location) else {
        return vec![false; links.len()];
    };
    links
        .iter()
        .map(|link| {
            current
                .join(link.href)
                .map(|target| target.path() == current.path())
                .unwrap_or(false)
        })
        .collect()
}

/// Full URL of the loaded page, if running in a browser
pub fn current_location() -> Option<String> {
    web_sys::window()?.location().href().ok()
}
