//! In-memory filtering and pagination of the admin user list
//!
//! Everything here is pure: the functions take a snapshot of records and
//! criteria and return a derived view. [`ListView`] adds the page state of
//! the table, resetting to page 1 whenever the criteria change.

pub mod filter;
pub mod paginate;
pub mod query;
pub mod view;

pub use filter::{FilterCriteria, filter};
pub use paginate::{Page, PaginatedResponse, PaginationMeta, paginate, total_pages};
pub use query::ListingQuery;
pub use view::{ListPage, ListView};
