//! Dashboard Controller
//!
//! Loads issue data from the backend and pushes it into the view. Every
//! fetch failure stops here: it is logged, the user is notified once, and
//! whatever was rendered before stays on screen.

use std::cell::Cell;

use crate::api::IssueApi;
use crate::models::IssueCounts;
use crate::pagination::{page_controls, total_pages};
use crate::render::{DashboardView, IssueRow};

pub const ISSUES_ERROR: &str = "Error fetching issues. Please try again.";
pub const COUNTS_ERROR: &str = "Error fetching issue counts. Please try again.";

pub struct DashboardController<A, V> {
    api: A,
    view: V,
    items_per_page: u32,
    /// Last page rendered successfully
    current_page: Cell<u32>,
}

impl<A: IssueApi, V: DashboardView> DashboardController<A, V> {
    pub fn new(api: A, view: V, items_per_page: u32) -> Self {
        Self {
            api,
            view,
            items_per_page,
            current_page: Cell::new(1),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page.get()
    }

    /// Load `page` (default 1) into the table and rebuild the pager.
    ///
    /// Overlapping calls are not cancelled; the last response to arrive wins.
    pub async fn fetch_and_display_issues(&self, page: Option<u32>) {
        let page = page.unwrap_or(1).max(1);
        match self.api.issues(page, self.items_per_page).await {
            Ok(data) => {
                let rows: Vec<IssueRow> = data.issues.iter().map(IssueRow::from).collect();
                let pages = total_pages(data.total_issues, self.items_per_page);
                log::debug!(
                    "Showing page {}/{} ({} rows, {} issues)",
                    page,
                    pages,
                    rows.len(),
                    data.total_issues
                );
                self.view.render_issue_rows(rows);
                self.view.render_pagination(page_controls(pages, page));
                self.current_page.set(page);
            }
            Err(e) => {
                log::error!("Error fetching issues: {}", e);
                self.view.notify_error(ISSUES_ERROR);
            }
        }
    }

    /// Load the three summary counts
    pub async fn fetch_issue_counts(&self) {
        match self.api.issue_counts().await {
            Ok(counts) => {
                let IssueCounts {
                    total_issues,
                    pending_issues,
                    resolved_issues,
                } = counts;
                log::debug!(
                    "Counts: {} total, {} pending, {} resolved",
                    total_issues,
                    pending_issues,
                    resolved_issues
                );
                self.view.render_counts(counts);
            }
            Err(e) => {
                log::error!("Error fetching issue counts: {}", e);
                self.view.notify_error(COUNTS_ERROR);
            }
        }
    }

    /// Reload the first page and the counts, concurrently
    pub async fn refresh(&self) {
        futures::join!(self.fetch_and_display_issues(None), self.fetch_issue_counts());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::models::{Issue, IssuePage, IssueStatus};
    use crate::pagination::PageControl;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct FakeApi {
        pages: RefCell<VecDeque<Result<IssuePage, FetchError>>>,
        counts: RefCell<VecDeque<Result<IssueCounts, FetchError>>>,
        page_requests: RefCell<Vec<(u32, u32)>>,
        count_requests: Cell<usize>,
    }

    impl FakeApi {
        fn queue_page(&self, response: Result<IssuePage, FetchError>) {
            self.pages.borrow_mut().push_back(response);
        }

        fn queue_counts(&self, response: Result<IssueCounts, FetchError>) {
            self.counts.borrow_mut().push_back(response);
        }
    }

    #[async_trait(?Send)]
    impl IssueApi for FakeApi {
        async fn issue_counts(&self) -> Result<IssueCounts, FetchError> {
            self.count_requests.set(self.count_requests.get() + 1);
            self.counts
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("nothing queued".into())))
        }

        async fn issues(&self, page: u32, items_per_page: u32) -> Result<IssuePage, FetchError> {
            self.page_requests.borrow_mut().push((page, items_per_page));
            self.pages
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("nothing queued".into())))
        }
    }

    #[derive(Default)]
    struct RecordingView {
        rows: RefCell<Option<Vec<IssueRow>>>,
        pages: RefCell<Option<Vec<PageControl>>>,
        counts: RefCell<Option<IssueCounts>>,
        notifications: RefCell<Vec<String>>,
    }

    impl DashboardView for RecordingView {
        fn render_issue_rows(&self, rows: Vec<IssueRow>) {
            *self.rows.borrow_mut() = Some(rows);
        }

        fn render_pagination(&self, controls: Vec<PageControl>) {
            *self.pages.borrow_mut() = Some(controls);
        }

        fn render_counts(&self, counts: IssueCounts) {
            *self.counts.borrow_mut() = Some(counts);
        }

        fn notify_error(&self, message: &str) {
            self.notifications.borrow_mut().push(message.to_string());
        }
    }

    fn controller() -> DashboardController<FakeApi, RecordingView> {
        DashboardController::new(FakeApi::default(), RecordingView::default(), 5)
    }

    fn issues(count: usize, total_issues: u64) -> IssuePage {
        let statuses = ["pending", "resolved", "duplicate"];
        IssuePage {
            total_issues,
            issues: (0..count)
                .map(|i| Issue {
                    id: Some(format!("id-{}", i)),
                    submitted_at: format!("2024-01-{:02} 10:00:00", i + 1),
                    user_id: Some(format!("user{}", i)),
                    issue_type: "Straxen".into(),
                    description: format!("Issue number {}", i),
                    reproduce: None,
                    log: None,
                    status: IssueStatus::from(statuses[i % 3].to_string()),
                })
                .collect(),
        }
    }

    fn active_pages(view: &RecordingView) -> Vec<u32> {
        view.pages
            .borrow()
            .as_ref()
            .map(|pages| pages.iter().filter(|c| c.active).map(|c| c.number).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_page_two_of_twelve() {
        let c = controller();
        c.api.queue_page(Ok(issues(5, 12)));

        block_on(c.fetch_and_display_issues(Some(2)));

        assert_eq!(*c.api.page_requests.borrow(), vec![(2, 5)]);
        assert_eq!(c.view.rows.borrow().as_ref().map(Vec::len), Some(5));
        assert_eq!(c.view.pages.borrow().as_ref().map(Vec::len), Some(3));
        assert_eq!(active_pages(&c.view), vec![2]);
        assert_eq!(c.current_page(), 2);
        assert!(c.view.notifications.borrow().is_empty());
    }

    #[test]
    fn test_default_page_is_first() {
        let c = controller();
        c.api.queue_page(Ok(issues(3, 3)));

        block_on(c.fetch_and_display_issues(None));

        assert_eq!(*c.api.page_requests.borrow(), vec![(1, 5)]);
        assert_eq!(active_pages(&c.view), vec![1]);
    }

    #[test]
    fn test_rows_keep_order_and_badges() {
        let c = controller();
        c.api.queue_page(Ok(issues(3, 3)));

        block_on(c.fetch_and_display_issues(None));

        let rows = c.view.rows.borrow().clone().expect("rows rendered");
        let descriptions: Vec<_> = rows.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Issue number 0", "Issue number 1", "Issue number 2"]);
        let classes: Vec<_> = rows.iter().map(|r| r.status.class).collect();
        assert_eq!(classes, vec!["badge-warning", "badge-success", "badge-danger"]);
    }

    #[test]
    fn test_empty_result_has_no_pager() {
        let c = controller();
        c.api.queue_page(Ok(issues(0, 0)));

        block_on(c.fetch_and_display_issues(None));

        assert_eq!(*c.view.rows.borrow(), Some(vec![]));
        assert_eq!(*c.view.pages.borrow(), Some(vec![]));
    }

    #[test]
    fn test_issues_error_keeps_table() {
        let c = controller();
        c.api.queue_page(Ok(issues(5, 12)));
        c.api.queue_page(Err(FetchError::Status(500)));

        block_on(c.fetch_and_display_issues(Some(2)));
        let rows_before = c.view.rows.borrow().clone();
        let pages_before = c.view.pages.borrow().clone();

        block_on(c.fetch_and_display_issues(Some(3)));

        assert_eq!(*c.view.rows.borrow(), rows_before);
        assert_eq!(*c.view.pages.borrow(), pages_before);
        assert_eq!(*c.view.notifications.borrow(), vec![ISSUES_ERROR.to_string()]);
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_issues_network_error_notifies_once() {
        let c = controller();
        c.api.queue_page(Err(FetchError::Network("connection refused".into())));

        block_on(c.fetch_and_display_issues(None));

        assert_eq!(c.view.notifications.borrow().len(), 1);
        assert!(c.view.rows.borrow().is_none());
        assert!(c.view.pages.borrow().is_none());
    }

    #[test]
    fn test_counts_displayed() {
        let c = controller();
        c.api.queue_counts(Ok(IssueCounts {
            total_issues: 12,
            pending_issues: 5,
            resolved_issues: 7,
        }));

        block_on(c.fetch_issue_counts());

        let counts = c.view.counts.borrow().expect("counts rendered");
        assert_eq!(
            (counts.total_issues, counts.pending_issues, counts.resolved_issues),
            (12, 5, 7)
        );
    }

    #[test]
    fn test_counts_error_leaves_everything() {
        let c = controller();
        c.api.queue_counts(Ok(IssueCounts {
            total_issues: 4,
            pending_issues: 1,
            resolved_issues: 3,
        }));
        c.api.queue_counts(Err(FetchError::Status(503)));
        c.api.queue_page(Ok(issues(4, 4)));

        block_on(c.fetch_issue_counts());
        block_on(c.fetch_and_display_issues(None));
        block_on(c.fetch_issue_counts());

        assert_eq!(c.view.counts.borrow().map(|c| c.total_issues), Some(4));
        assert_eq!(c.view.rows.borrow().as_ref().map(Vec::len), Some(4));
        assert_eq!(*c.view.notifications.borrow(), vec![COUNTS_ERROR.to_string()]);
    }

    #[test]
    fn test_refresh_resets_to_first_page() {
        let c = controller();
        c.api.queue_page(Ok(issues(5, 12)));
        block_on(c.fetch_and_display_issues(Some(3)));
        assert_eq!(c.current_page(), 3);

        c.api.queue_page(Ok(issues(5, 12)));
        c.api.queue_counts(Ok(IssueCounts::default()));
        block_on(c.refresh());

        assert_eq!(*c.api.page_requests.borrow(), vec![(3, 5), (1, 5)]);
        assert_eq!(c.api.count_requests.get(), 1);
        assert_eq!(active_pages(&c.view), vec![1]);
        assert_eq!(c.current_page(), 1);
        assert!(c.view.notifications.borrow().is_empty());
    }

    #[test]
    fn test_refresh_failures_are_independent() {
        let c = controller();
        c.api.queue_page(Err(FetchError::Status(500)));
        c.api.queue_counts(Ok(IssueCounts {
            total_issues: 12,
            pending_issues: 5,
            resolved_issues: 7,
        }));

        block_on(c.refresh());

        assert!(c.view.rows.borrow().is_none());
        assert_eq!(c.view.counts.borrow().map(|c| c.pending_issues), Some(5));
        assert_eq!(*c.view.notifications.borrow(), vec![ISSUES_ERROR.to_string()]);
    }
}
