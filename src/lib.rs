//! # Callto Core
//!
//! Shared logic behind the Callto admin dashboard and its API.
//!
//! ## Features
//!
//! - **User listing**: case-insensitive search, account-type filters and
//!   1-indexed pagination over an in-memory snapshot of users
//! - **Page state**: a list view that jumps back to page 1 whenever the
//!   filter changes
//! - **Request validation**: declarative rule groups for every API payload,
//!   reporting all field errors at once
//! - **Sanitizing**: trim/lowercase passes applied to payloads that passed
//!   validation
//! - **Axum adapter**: routes and a `ValidatedJson` extractor answering
//!   `400 { "errors": [...] }`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use callto::prelude::*;
//!
//! let users = vec![
//!     UserRecord::new("1", AccountType::Listener).with_display_name("Asha"),
//!     UserRecord::new("2", AccountType::User).with_email("ben@example.com"),
//! ];
//!
//! let mut view = ListView::new(10);
//! view.set_search("asha");
//! let page = view.render(&users);
//! assert_eq!(page.items.len(), 1);
//!
//! let errors = RuleGroup::rating()
//!     .validate(&json!({ "rating": 6 }))
//!     .unwrap_err();
//! assert_eq!(errors.len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod listing;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, CoreError, FieldError, RequestError, ValidationErrors},
        user::{AccountType, UserRecord},
        validation::{
            FieldRule, PayloadSchema, Presence, RuleGroup, RuleGroupName, ValidatedJson,
            validate,
        },
    };

    // === Listing ===
    pub use crate::listing::{
        FilterCriteria, ListPage, ListView, ListingQuery, Page, PaginatedResponse,
        PaginationMeta, filter, paginate,
    };

    // === Config ===
    pub use crate::config::{CoreConfig, ListingConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, build_router, init_tracing, serve};

    // === External dependencies ===
    pub use serde_json::{Value, json};
}
