//! Search and account-type filtering over user snapshots

use crate::core::user::{AccountType, UserRecord};
use serde::{Deserialize, Serialize};

/// Active filter predicates of the user list
///
/// All predicates apply together. `listener_only` restricts to listeners on
/// top of whatever `account_type` says, so `account_type = admin` combined
/// with `listener_only` matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against display name and email
    pub search: String,

    /// Exact account type, `None` for all
    pub account_type: Option<AccountType>,

    /// Only listeners
    pub listener_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn listeners_only(mut self) -> Self {
        self.listener_only = true;
        self
    }

    /// Whether a single record passes every predicate
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.matches_search(record)
            && self
                .account_type
                .is_none_or(|wanted| record.account_type == wanted)
            && (!self.listener_only || record.account_type == AccountType::Listener)
    }

    fn matches_search(&self, record: &UserRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        };
        contains(&record.display_name) || contains(&record.email)
    }
}

/// Records matching `criteria`, in input order
pub fn filter<'a>(records: &'a [UserRecord], criteria: &FilterCriteria) -> Vec<&'a UserRecord> {
    let matched: Vec<&UserRecord> = records.iter().filter(|r| criteria.matches(r)).collect();

    tracing::debug!(
        total = records.len(),
        matched = matched.len(),
        "Filtered user records"
    );

    matched
}
