//! Axum extractor for validated payloads
//!
//! [`ValidatedJson<S>`] runs the rule group of a [`PayloadSchema`] against
//! the JSON body and hands the sanitized payload to the handler. Invalid
//! payloads are rejected with `400 { "errors": [...] }`.

use super::rules::RuleGroup;
use crate::core::error::{CoreError, RequestError};
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::marker::PhantomData;

/// A payload kind with a rule group attached
pub trait PayloadSchema {
    fn rule_group() -> RuleGroup;
}

/// Declare unit schemas backed by a `RuleGroup` constructor
macro_rules! payload_schemas {
    ($($(#[$meta:meta])* $name:ident => $ctor:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl PayloadSchema for $name {
                fn rule_group() -> RuleGroup {
                    RuleGroup::$ctor()
                }
            }
        )*
    };
}

payload_schemas! {
    /// `POST /auth/send-otp`
    PhoneSchema => phone,
    /// `POST /auth/verify-otp`
    OtpSchema => otp,
    RegistrationSchema => registration,
    ListenerProfileSchema => listener_profile,
    CallCreationSchema => call_creation,
    RatingSchema => rating,
    MessageSchema => message,
}

/// Axum extractor that validates and sanitizes a JSON body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn rate_call(
///     ValidatedJson(payload, _): ValidatedJson<RatingSchema>,
/// ) -> StatusCode {
///     // payload already passed the rating rules
/// }
/// ```
pub struct ValidatedJson<S>(pub Value, pub PhantomData<S>);

impl<S> ValidatedJson<S> {
    pub fn new(payload: Value) -> Self {
        Self(payload, PhantomData)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl<S> std::ops::Deref for ValidatedJson<S> {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<St, S> FromRequest<St> for ValidatedJson<S>
where
    St: Send + Sync,
    S: PayloadSchema + Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &St) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            CoreError::from(RequestError::InvalidBody {
                message: e.body_text(),
            })
            .into_response()
        })?;

        let group = S::rule_group();
        match group.validate_and_sanitize(&payload) {
            Ok(sanitized) => Ok(ValidatedJson::new(sanitized)),
            Err(errors) => Err(errors.into_response()),
        }
    }
}
