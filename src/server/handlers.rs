//! HTTP handlers for listing users and checking payloads

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::config::CoreConfig;
use crate::core::error::{CoreError, RequestError};
use crate::core::user::UserRecord;
use crate::core::validation::{PayloadSchema, RuleGroup, RuleGroupName, ValidatedJson};
use crate::listing::{ListView, ListingQuery, PaginatedResponse};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Snapshot of users supplied by the backend
    pub users: Arc<Vec<UserRecord>>,
    pub config: Arc<CoreConfig>,
}

impl AppState {
    pub fn new(config: CoreConfig, users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(users),
            config: Arc::new(config),
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// List users matching the query, one page at a time
///
/// Requested pages are clamped to the pages that exist for the filter.
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<PaginatedResponse<UserRecord>>, CoreError> {
    let Query(query) = query.map_err(|e| RequestError::InvalidQuery {
        param: "query".to_string(),
        message: e.body_text(),
    })?;

    let mut view = ListView::from_config(&state.config.listing);
    view.set_criteria(query.criteria()?);
    view.go_to(query.page(), &state.users);

    let page = view.render(&state.users);
    Ok(Json(PaginatedResponse {
        data: page.items.into_iter().cloned().collect(),
        pagination: page.meta,
    }))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, RequestError> {
    body.map(|Json(payload)| payload)
        .map_err(|e| RequestError::InvalidBody {
            message: e.body_text(),
        })
}

/// Check a payload against a named rule group
///
/// 204 when the payload passes, 400 with every field error otherwise.
pub async fn validate_group(
    Path(group): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let group: RuleGroupName = group.parse().map_err(RequestError::from)?;
    let payload = json_body(body)?;

    group.rules().validate(&payload)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Check that `field` in the payload holds a UUID
pub async fn validate_uuid_param(
    Path(field): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let payload = json_body(body)?;

    RuleGroup::uuid_param(&field).validate(&payload)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Accept a payload of schema `S` and echo it back sanitized
pub async fn accept_payload<S>(ValidatedJson(payload, _): ValidatedJson<S>) -> Json<Value>
where
    S: PayloadSchema + Send + Sync,
{
    Json(payload)
}
