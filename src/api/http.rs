//! Browser Fetch Client
//!
//! `IssueApi` over `window.fetch`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{FetchError, IssueApi};
use crate::config::DashboardConfig;
use crate::models::{IssueCounts, IssuePage};

#[derive(Debug, Clone)]
pub struct HttpIssueApi {
    counts_endpoint: String,
    issues_endpoint: String,
}

impl HttpIssueApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            counts_endpoint: config.counts_endpoint.clone(),
            issues_endpoint: config.issues_endpoint.clone(),
        }
    }

    fn issues_url(&self, page: u32, items_per_page: u32) -> String {
        format!("{}?page={}&items_per_page={}", self.issues_endpoint, page, items_per_page)
    }
}

/// GET `url` and decode a JSON body, rejecting non-2xx statuses
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or(FetchError::Unavailable)?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(FetchError::network)?;
    let resp: web_sys::Response = resp.dyn_into().map_err(FetchError::network)?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(FetchError::decode)?)
        .await
        .map_err(FetchError::decode)?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

#[async_trait(?Send)]
impl IssueApi for HttpIssueApi {
    async fn issue_counts(&self) -> Result<IssueCounts, FetchError> {
        log::debug!("GET {}", self.counts_endpoint);
        get_json(&self.counts_endpoint).await
    }

    async fn issues(&self, page: u32, items_per_page: u32) -> Result<IssuePage, FetchError> {
        let url = self.issues_url(page, items_per_page);
        log::debug!("GET {}", url);
        get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_url() {
        let api = HttpIssueApi::new(&DashboardConfig::default());
        assert_eq!(api.issues_url(2, 5), "/get-issues?page=2&items_per_page=5");
        assert_eq!(api.counts_endpoint, "/get-issue-counts");
    }
}
