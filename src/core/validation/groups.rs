//! Rule groups for the Callto API payloads

use super::rules::{FieldRule, RuleGroup};
use super::{sanitizers, validators};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// E.164-style phone number, optional leading `+`
pub const PHONE_PATTERN: &str = r"^\+?[1-9]\d{1,14}$";

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];
pub const CALL_TYPES: &[&str] = &["audio", "video", "random"];
pub const MESSAGE_TYPES: &[&str] = &["text", "image", "audio", "video", "file"];

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

/// Names of the fixed rule groups
///
/// `uuid_param` is not listed: it needs a field name, see
/// [`RuleGroup::uuid_param`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroupName {
    Phone,
    Otp,
    Registration,
    ListenerProfile,
    CallCreation,
    Rating,
    Message,
    Pagination,
}

impl RuleGroupName {
    pub const ALL: [RuleGroupName; 8] = [
        RuleGroupName::Phone,
        RuleGroupName::Otp,
        RuleGroupName::Registration,
        RuleGroupName::ListenerProfile,
        RuleGroupName::CallCreation,
        RuleGroupName::Rating,
        RuleGroupName::Message,
        RuleGroupName::Pagination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleGroupName::Phone => "phone",
            RuleGroupName::Otp => "otp",
            RuleGroupName::Registration => "registration",
            RuleGroupName::ListenerProfile => "listener_profile",
            RuleGroupName::CallCreation => "call_creation",
            RuleGroupName::Rating => "rating",
            RuleGroupName::Message => "message",
            RuleGroupName::Pagination => "pagination",
        }
    }

    /// Build the rule group this name refers to
    pub fn rules(&self) -> RuleGroup {
        match self {
            RuleGroupName::Phone => RuleGroup::phone(),
            RuleGroupName::Otp => RuleGroup::otp(),
            RuleGroupName::Registration => RuleGroup::registration(),
            RuleGroupName::ListenerProfile => RuleGroup::listener_profile(),
            RuleGroupName::CallCreation => RuleGroup::call_creation(),
            RuleGroupName::Rating => RuleGroup::rating(),
            RuleGroupName::Message => RuleGroup::message(),
            RuleGroupName::Pagination => RuleGroup::pagination(),
        }
    }
}

impl fmt::Display for RuleGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a rule group
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule group: {0}")]
pub struct UnknownRuleGroup(pub String);

impl FromStr for RuleGroupName {
    type Err = UnknownRuleGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleGroupName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRuleGroup(s.to_string()))
    }
}

impl RuleGroup {
    /// Phone number submitted to request an OTP
    pub fn phone() -> Self {
        RuleGroup::new(RuleGroupName::Phone.as_str()).field(
            FieldRule::required("phone_number")
                .with_message("Phone number is required")
                .check(validators::matches(phone_regex()))
                .with_message("Invalid phone number format"),
        )
    }

    /// OTP verification
    ///
    /// Only the length of the code is checked: `"12a456"` is accepted.
    pub fn otp() -> Self {
        RuleGroup::new(RuleGroupName::Otp.as_str())
            .field(FieldRule::required("phone_number").with_message("Phone number is required"))
            .field(
                FieldRule::required("otp")
                    .with_message("OTP is required")
                    .check(validators::exact_length(6))
                    .with_message("OTP must be 6 digits"),
            )
    }

    /// Profile details sent while completing registration
    pub fn registration() -> Self {
        RuleGroup::new(RuleGroupName::Registration.as_str())
            .field(
                FieldRule::optional("display_name")
                    .check(validators::length_between(2, 50))
                    .with_message("Display name must be between 2 and 50 characters")
                    .sanitize(sanitizers::trim()),
            )
            .field(
                FieldRule::optional("email")
                    .check(validators::email())
                    .with_message("Invalid email format")
                    .sanitize(sanitizers::trim())
                    .sanitize(sanitizers::lowercase()),
            )
            .field(
                FieldRule::optional("gender")
                    .check(validators::one_of(GENDERS))
                    .with_message("Gender must be Male, Female, or Other"),
            )
            .field(
                FieldRule::optional("city")
                    .check(validators::length_between(2, 100))
                    .with_message("City must be between 2 and 100 characters")
                    .sanitize(sanitizers::trim()),
            )
    }

    /// Listener onboarding profile
    pub fn listener_profile() -> Self {
        RuleGroup::new(RuleGroupName::ListenerProfile.as_str())
            .field(
                FieldRule::required("professional_name")
                    .with_message("Professional name is required")
                    .check(validators::length_between(2, 100))
                    .with_message("Professional name must be between 2 and 100 characters")
                    .sanitize(sanitizers::trim()),
            )
            .field(
                FieldRule::required("rate_per_minute")
                    .with_message("Rate per minute is required")
                    .check(validators::number_in(Some(0.0), None))
                    .with_message("Rate must be a positive number"),
            )
            .field(
                FieldRule::required("specialties")
                    .with_message("Specialties are required")
                    .check(validators::non_empty_list())
                    .with_message("At least one specialty is required"),
            )
            .field(
                FieldRule::required("languages")
                    .with_message("Languages are required")
                    .check(validators::non_empty_list())
                    .with_message("At least one language is required"),
            )
    }

    /// Starting a call with a listener
    pub fn call_creation() -> Self {
        RuleGroup::new(RuleGroupName::CallCreation.as_str())
            .field(
                FieldRule::required("listener_id")
                    .with_message("Listener ID is required")
                    .check(validators::uuid())
                    .with_message("Invalid listener ID"),
            )
            .field(
                FieldRule::optional("call_type")
                    .check(validators::one_of(CALL_TYPES))
                    .with_message("Call type must be audio, video, or random"),
            )
    }

    /// Rating a finished call
    pub fn rating() -> Self {
        RuleGroup::new(RuleGroupName::Rating.as_str())
            .field(
                FieldRule::required("rating")
                    .with_message("Rating is required")
                    .check(validators::number_in(Some(1.0), Some(5.0)))
                    .with_message("Rating must be between 1 and 5"),
            )
            .field(
                FieldRule::optional("review_text")
                    .check(validators::max_length(500))
                    .with_message("Review text must not exceed 500 characters"),
            )
    }

    /// Chat message
    pub fn message() -> Self {
        RuleGroup::new(RuleGroupName::Message.as_str())
            .field(
                FieldRule::required("message_content")
                    .with_message("Message content is required")
                    .check(validators::max_length(2000))
                    .with_message("Message must not exceed 2000 characters")
                    .sanitize(sanitizers::trim()),
            )
            .field(
                FieldRule::optional("message_type")
                    .check(validators::one_of(MESSAGE_TYPES))
                    .with_message("Invalid message type"),
            )
    }

    /// A UUID carried under a caller-chosen name, usually a path parameter
    pub fn uuid_param(name: &str) -> Self {
        RuleGroup::new(format!("uuid_param({})", name)).field(
            FieldRule::required(name)
                .with_message(format!("{} is required", name))
                .check(validators::uuid())
                .with_message(format!("Invalid {}", name)),
        )
    }

    /// `limit` / `offset` query parameters
    pub fn pagination() -> Self {
        RuleGroup::new(RuleGroupName::Pagination.as_str())
            .field(
                FieldRule::optional("limit")
                    .check(validators::integer_in(Some(1), Some(100)))
                    .with_message("Limit must be between 1 and 100"),
            )
            .field(
                FieldRule::optional("offset")
                    .check(validators::integer_in(Some(0), None))
                    .with_message("Offset must be a non-negative integer"),
            )
    }
}
