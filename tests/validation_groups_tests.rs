//! Behaviour of every request rule group
//!
//! Each check of a field runs independently and every failing check shows
//! up as its own error, in declaration order.

use callto::prelude::*;
use uuid::Uuid;

fn fields(errors: &ValidationErrors) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

// =============================================================================
// phone
// =============================================================================

mod phone_tests {
    use super::*;

    #[test]
    fn test_valid_e164_number_passes() {
        assert!(validate(RuleGroupName::Phone, &json!({"phone_number": "+14155552671"})).is_ok());
    }

    #[test]
    fn test_number_without_plus_passes() {
        assert!(validate(RuleGroupName::Phone, &json!({"phone_number": "919876543210"})).is_ok());
    }

    #[test]
    fn test_leading_zero_fails_pattern() {
        let errors =
            validate(RuleGroupName::Phone, &json!({"phone_number": "0123456"})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].message, "Invalid phone number format");
    }

    #[test]
    fn test_too_long_fails_pattern() {
        let errors = validate(
            RuleGroupName::Phone,
            &json!({"phone_number": "+1234567890123456"}),
        )
        .unwrap_err();
        assert_eq!(fields(&errors), vec!["phone_number"]);
    }

    #[test]
    fn test_missing_number_reports_required_and_format() {
        let errors = validate(RuleGroupName::Phone, &json!({})).unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Phone number is required", "Invalid phone number format"]
        );
    }
}

// =============================================================================
// otp
// =============================================================================

mod otp_tests {
    use super::*;

    #[test]
    fn test_five_characters_fails_length_only() {
        let errors = validate(
            RuleGroupName::Otp,
            &json!({"phone_number": "+14155552671", "otp": "12a45"}),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].field, "otp");
        assert_eq!(errors.errors[0].message, "OTP must be 6 digits");
    }

    #[test]
    fn test_six_alphanumeric_characters_pass() {
        assert!(
            validate(
                RuleGroupName::Otp,
                &json!({"phone_number": "+14155552671", "otp": "12a456"})
            )
            .is_ok()
        );
    }

    #[test]
    fn test_phone_number_only_needs_presence() {
        assert!(
            validate(
                RuleGroupName::Otp,
                &json!({"phone_number": "not a phone", "otp": "123456"})
            )
            .is_ok()
        );
    }

    #[test]
    fn test_empty_payload() {
        let errors = validate(RuleGroupName::Otp, &json!({})).unwrap_err();
        assert_eq!(fields(&errors), vec!["phone_number", "otp", "otp"]);
    }
}

// =============================================================================
// registration
// =============================================================================

mod registration_tests {
    use super::*;

    #[test]
    fn test_everything_optional() {
        assert!(validate(RuleGroupName::Registration, &json!({})).is_ok());
        assert!(
            validate(
                RuleGroupName::Registration,
                &json!({"display_name": "", "email": null, "gender": "", "city": ""})
            )
            .is_ok()
        );
    }

    #[test]
    fn test_full_valid_payload() {
        let payload = json!({
            "display_name": "Asha",
            "email": "asha@example.com",
            "gender": "Female",
            "city": "Pune"
        });
        assert!(validate(RuleGroupName::Registration, &payload).is_ok());
    }

    #[test]
    fn test_each_present_field_is_checked() {
        let payload = json!({
            "display_name": "A",
            "email": "not-an-email",
            "gender": "female",
            "city": "x".repeat(101)
        });
        let errors = validate(RuleGroupName::Registration, &payload).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["display_name", "email", "gender", "city"]
        );
    }

    #[test]
    fn test_display_name_upper_bound() {
        let ok = json!({"display_name": "n".repeat(50)});
        let too_long = json!({"display_name": "n".repeat(51)});
        assert!(validate(RuleGroupName::Registration, &ok).is_ok());
        assert!(validate(RuleGroupName::Registration, &too_long).is_err());
    }

    #[test]
    fn test_sanitize_trims_and_lowercases() {
        let payload = json!({"display_name": "  Asha ", "email": " Asha@Example.COM", "city": " Pune "});
        let sanitized = RuleGroup::registration().sanitize(&payload);

        assert_eq!(sanitized["display_name"], "Asha");
        assert_eq!(sanitized["email"], "asha@example.com");
        assert_eq!(sanitized["city"], "Pune");
    }
}

// =============================================================================
// listener_profile
// =============================================================================

mod listener_profile_tests {
    use super::*;

    fn valid() -> Value {
        json!({
            "professional_name": "Dr. Listener",
            "rate_per_minute": 0,
            "specialties": ["grief"],
            "languages": ["en", "hi"]
        })
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate(RuleGroupName::ListenerProfile, &valid()).is_ok());
    }

    #[test]
    fn test_rate_as_numeric_string_passes() {
        let mut payload = valid();
        payload["rate_per_minute"] = json!("2.50");
        assert!(validate(RuleGroupName::ListenerProfile, &payload).is_ok());
    }

    #[test]
    fn test_negative_rate_fails() {
        let mut payload = valid();
        payload["rate_per_minute"] = json!(-1);
        let errors = validate(RuleGroupName::ListenerProfile, &payload).unwrap_err();
        assert_eq!(errors.for_field("rate_per_minute"), vec!["Rate must be a positive number"]);
    }

    #[test]
    fn test_empty_lists_fail() {
        let mut payload = valid();
        payload["specialties"] = json!([]);
        payload["languages"] = json!("en");
        let errors = validate(RuleGroupName::ListenerProfile, &payload).unwrap_err();
        assert_eq!(fields(&errors), vec!["specialties", "languages"]);
    }

    #[test]
    fn test_empty_payload_fails_every_check() {
        let errors = validate(RuleGroupName::ListenerProfile, &json!({})).unwrap_err();
        assert_eq!(errors.len(), 8);
        assert_eq!(errors.by_field().len(), 4);
    }
}

// =============================================================================
// call_creation
// =============================================================================

mod call_creation_tests {
    use super::*;

    #[test]
    fn test_not_a_uuid_fails() {
        let errors =
            validate(RuleGroupName::CallCreation, &json!({"listener_id": "not-a-uuid"})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].message, "Invalid listener ID");
    }

    #[test]
    fn test_uuid_with_call_type() {
        let payload = json!({"listener_id": Uuid::new_v4().to_string(), "call_type": "video"});
        assert!(validate(RuleGroupName::CallCreation, &payload).is_ok());
    }

    #[test]
    fn test_unknown_call_type() {
        let payload = json!({"listener_id": Uuid::new_v4().to_string(), "call_type": "conference"});
        let errors = validate(RuleGroupName::CallCreation, &payload).unwrap_err();
        assert_eq!(fields(&errors), vec!["call_type"]);
    }
}

// =============================================================================
// rating
// =============================================================================

mod rating_tests {
    use super::*;

    #[test]
    fn test_rating_above_range_fails() {
        let errors = validate(RuleGroupName::Rating, &json!({"rating": 6})).unwrap_err();
        assert_eq!(errors.for_field("rating"), vec!["Rating must be between 1 and 5"]);
    }

    #[test]
    fn test_long_review_is_the_only_failure() {
        let payload = json!({"rating": 3, "review_text": "r".repeat(501)});
        let errors = validate(RuleGroupName::Rating, &payload).unwrap_err();
        assert_eq!(fields(&errors), vec!["review_text"]);
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(validate(RuleGroupName::Rating, &json!({"rating": 1})).is_ok());
        assert!(validate(RuleGroupName::Rating, &json!({"rating": 5, "review_text": "r".repeat(500)})).is_ok());
        assert!(validate(RuleGroupName::Rating, &json!({"rating": 0})).is_err());
    }
}

// =============================================================================
// message
// =============================================================================

mod message_tests {
    use super::*;

    #[test]
    fn test_message_limits() {
        assert!(validate(RuleGroupName::Message, &json!({"message_content": "hi"})).is_ok());
        assert!(
            validate(
                RuleGroupName::Message,
                &json!({"message_content": "m".repeat(2001)})
            )
            .is_err()
        );
    }

    #[test]
    fn test_missing_content_is_required_only() {
        let errors = validate(RuleGroupName::Message, &json!({})).unwrap_err();
        assert_eq!(errors.for_field("message_content"), vec!["Message content is required"]);
    }

    #[test]
    fn test_message_type() {
        let ok = json!({"message_content": "x", "message_type": "image"});
        let bad = json!({"message_content": "x", "message_type": "sticker"});
        assert!(validate(RuleGroupName::Message, &ok).is_ok());
        assert_eq!(
            validate(RuleGroupName::Message, &bad).unwrap_err().errors[0].message,
            "Invalid message type"
        );
    }
}

// =============================================================================
// uuid_param / pagination
// =============================================================================

mod param_tests {
    use super::*;

    #[test]
    fn test_uuid_param_named_field() {
        let group = RuleGroup::uuid_param("call_id");
        assert!(group.validate(&json!({"call_id": Uuid::new_v4().to_string()})).is_ok());

        let errors = group.validate(&json!({"id": Uuid::new_v4().to_string()})).unwrap_err();
        assert_eq!(fields(&errors), vec!["call_id", "call_id"]);
        assert_eq!(errors.errors[0].message, "call_id is required");
    }

    #[test]
    fn test_pagination_defaults_allowed() {
        assert!(validate(RuleGroupName::Pagination, &json!({})).is_ok());
        assert!(validate(RuleGroupName::Pagination, &json!({"limit": "20", "offset": "0"})).is_ok());
    }

    #[test]
    fn test_pagination_out_of_range() {
        let errors =
            validate(RuleGroupName::Pagination, &json!({"limit": 101, "offset": -1})).unwrap_err();
        assert_eq!(fields(&errors), vec!["limit", "offset"]);

        let errors = validate(RuleGroupName::Pagination, &json!({"limit": 0})).unwrap_err();
        assert_eq!(errors.errors[0].message, "Limit must be between 1 and 100");
    }
}
