//! Backend API
//!
//! The two issue tracker endpoints the dashboard reads from.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::{IssueCounts, IssuePage};

pub use error::FetchError;
pub use http::HttpIssueApi;

/// Issue tracker backend
///
/// Futures are not `Send`: they resolve on the browser UI thread.
#[async_trait(?Send)]
pub trait IssueApi {
    /// `GET /get-issue-counts`
    async fn issue_counts(&self) -> Result<IssueCounts, FetchError>;

    /// `GET /get-issues?page=..&items_per_page=..`
    async fn issues(&self, page: u32, items_per_page: u32) -> Result<IssuePage, FetchError>;
}
