//! Stateful wrapper driving the admin user table
//!
//! [`ListView`] holds the current criteria and page. Any change to the
//! effective criteria puts the view back on page 1, so a narrower filter can
//! never leave it pointing at a page that no longer exists.

use super::filter::{FilterCriteria, filter};
use super::paginate::{PaginationMeta, paginate, total_pages};
use crate::config::ListingConfig;
use crate::core::user::{AccountType, UserRecord};

/// Rendered page of the user table
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<'a> {
    pub items: Vec<&'a UserRecord>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(config: &ListingConfig) -> Self {
        Self::new(config.page_size)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.criteria.search != search {
            self.criteria.search = search;
            self.reset_page();
        }
    }

    pub fn set_account_type(&mut self, account_type: Option<AccountType>) {
        if self.criteria.account_type != account_type {
            self.criteria.account_type = account_type;
            self.reset_page();
        }
    }

    pub fn set_listener_only(&mut self, listener_only: bool) {
        if self.criteria.listener_only != listener_only {
            self.criteria.listener_only = listener_only;
            self.reset_page();
        }
    }

    /// Replace all criteria at once
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.reset_page();
        }
    }

    fn reset_page(&mut self) {
        if self.page != 1 {
            tracing::debug!(from = self.page, "Filter changed, back to first page");
        }
        self.page = 1;
    }

    fn page_count(&self, records: &[UserRecord]) -> usize {
        total_pages(filter(records, &self.criteria).len(), self.page_size)
    }

    /// Jump to `page`, clamped to the pages available for `records`
    pub fn go_to(&mut self, page: usize, records: &[UserRecord]) -> usize {
        self.page = page.clamp(1, self.page_count(records));
        self.page
    }

    /// Advance one page, staying on the last page
    pub fn next_page(&mut self, records: &[UserRecord]) -> usize {
        self.go_to(self.page.saturating_add(1), records)
    }

    /// Go back one page, staying on the first page
    pub fn prev_page(&mut self) -> usize {
        self.page = self.page.saturating_sub(1).max(1);
        self.page
    }

    /// Filter `records` and slice out the current page
    ///
    /// If `records` shrank since the page was chosen, the last page that
    /// still exists is rendered instead.
    pub fn render<'a>(&self, records: &'a [UserRecord]) -> ListPage<'a> {
        let matched = filter(records, &self.criteria);
        let current = self
            .page
            .min(total_pages(matched.len(), self.page_size));
        let page = paginate(&matched, current, self.page_size);

        ListPage {
            items: page.items.to_vec(),
            meta: PaginationMeta::new(current, self.page_size, matched.len()),
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::from_config(&ListingConfig::default())
    }
}
