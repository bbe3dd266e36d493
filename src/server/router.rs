//! Router assembly

use super::handlers::{
    AppState, accept_payload, health, list_users, validate_group, validate_uuid_param,
};
use crate::core::validation::extractor::{
    CallCreationSchema, ListenerProfileSchema, MessageSchema, OtpSchema, PhoneSchema,
    RatingSchema, RegistrationSchema,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the admin API routes
///
/// - GET /health - Liveness check
/// - GET /users - Filtered, paginated user list
/// - POST /validate/{group} - Check a payload against a named rule group
/// - POST /validate/uuid/{field} - Check that `field` holds a UUID
/// - POST /payloads/{kind} - Validate, sanitize and echo a payload
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users))
        .route("/validate/{group}", post(validate_group))
        .route("/validate/uuid/{field}", post(validate_uuid_param))
        .route("/payloads/phone", post(accept_payload::<PhoneSchema>))
        .route("/payloads/otp", post(accept_payload::<OtpSchema>))
        .route(
            "/payloads/registration",
            post(accept_payload::<RegistrationSchema>),
        )
        .route(
            "/payloads/listener-profile",
            post(accept_payload::<ListenerProfileSchema>),
        )
        .route("/payloads/call", post(accept_payload::<CallCreationSchema>))
        .route("/payloads/rating", post(accept_payload::<RatingSchema>))
        .route("/payloads/message", post(accept_payload::<MessageSchema>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
