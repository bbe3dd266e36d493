//! Query parameters for the user listing endpoint

use super::filter::FilterCriteria;
use crate::core::error::RequestError;
use crate::core::user::AccountType;
use serde::Deserialize;

/// Query parameters for filtering and paging the user list
///
/// # Example
/// ```text
/// GET /users?search=asha&account_type=listener&page=2
/// GET /users?listener_only=true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    /// Substring searched in display name and email
    pub search: String,

    /// `user`, `listener` or `admin`; empty or `all` means no filter
    pub account_type: Option<String>,

    pub listener_only: bool,

    /// Page number (starts at 1)
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            account_type: None,
            listener_only: false,
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Build the filter criteria, rejecting unknown account types
    pub fn criteria(&self) -> Result<FilterCriteria, RequestError> {
        let account_type = match self.account_type.as_deref() {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(raw.parse::<AccountType>().map_err(|e| {
                RequestError::InvalidQuery {
                    param: "account_type".to_string(),
                    message: e.to_string(),
                }
            })?),
        };

        Ok(FilterCriteria {
            search: self.search.clone(),
            account_type,
            listener_only: self.listener_only,
        })
    }
}
