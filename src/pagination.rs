//! Pagination Utilities
//!
//! Page-count arithmetic and the pager control model.

/// One numbered pager link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// 1-based page number
    pub number: u32,
    pub active: bool,
}

/// ceil(total_issues / items_per_page); zero when the page size is zero
pub fn total_pages(total_issues: u64, items_per_page: u32) -> u32 {
    if items_per_page == 0 {
        return 0;
    }
    let pages = total_issues.div_ceil(u64::from(items_per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Build one control per page, marking `current_page` active
pub fn page_controls(total_pages: u32, current_page: u32) -> Vec<PageControl> {
    (1..=total_pages)
        .map(|number| PageControl {
            number,
            active: number == current_page,
        })
        .collect()
}
