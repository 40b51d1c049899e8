//! Signup Schema
//!
//! Field order and message strings are part of the API contract; clients
//! assert on them. Keep the declaration order stable: name, email,
//! password, termsAccepted, phoneNumber, about.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::{FieldKind, FieldRules, Rule, Schema};
use crate::error::{AuthError, AuthResult};

/// Email grammar: one `@`, non-empty local part, dot-separated domain of
/// alphanumerics/hyphens with no label starting or ending in a hyphen
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is a valid regex")
});

/// Permissive phone grammar: digits, optional leading `+`, spaces,
/// hyphens, parentheses
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()\-]+$").expect("phone pattern is a valid regex"));

/// At least two whitespace-separated tokens, each at least two characters
fn has_first_and_last_name(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.len() >= 2 && tokens.iter().all(|token| token.chars().count() >= 2)
}

/// At least one lowercase letter, one uppercase letter and one digit,
/// in any order (the regex crate has no lookahead, so this is a predicate)
fn has_required_character_classes(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

static SIGNUP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldRules {
            field: "name",
            kind: FieldKind::Text,
            trim: true,
            type_message: "Name must be a string",
            rules: vec![
                Rule::Required {
                    message: "Name is required",
                },
                Rule::MinLength {
                    min: 2,
                    message: "Name must be at least 2 characters",
                },
                Rule::MaxLength {
                    max: 100,
                    message: "Name must be less than 100 characters",
                },
                Rule::Custom {
                    check: has_first_and_last_name,
                    message: "Name must contain at least first and last name",
                },
            ],
        },
        FieldRules {
            field: "email",
            kind: FieldKind::Text,
            trim: true,
            type_message: "Email must be a string",
            rules: vec![
                Rule::Required {
                    message: "Email is required",
                },
                Rule::Pattern {
                    pattern: EMAIL_PATTERN.clone(),
                    message: "Invalid email format",
                },
            ],
        },
        FieldRules {
            field: "password",
            kind: FieldKind::Text,
            trim: false,
            type_message: "Password must be a string",
            rules: vec![
                Rule::Required {
                    message: "Password is required",
                },
                Rule::MinLength {
                    min: 8,
                    message: "Password must be at least 8 characters",
                },
                Rule::Custom {
                    check: has_required_character_classes,
                    message: "Password must contain at least one uppercase letter, one lowercase letter, and one number",
                },
            ],
        },
        FieldRules {
            field: "termsAccepted",
            kind: FieldKind::Flag,
            trim: false,
            type_message: "Terms acceptance must be a boolean",
            rules: vec![
                Rule::Required {
                    message: "Terms acceptance is required",
                },
                Rule::MustBeTrue {
                    message: "You must accept the terms and conditions",
                },
            ],
        },
        FieldRules {
            field: "phoneNumber",
            kind: FieldKind::Text,
            trim: true,
            type_message: "Phone number must be a string",
            rules: vec![Rule::Pattern {
                pattern: PHONE_PATTERN.clone(),
                message: "Invalid phone number format",
            }],
        },
        FieldRules {
            field: "about",
            kind: FieldKind::Text,
            trim: false,
            type_message: "About section must be a string",
            rules: vec![Rule::MaxLength {
                max: 1000,
                message: "About section must be less than 1000 characters",
            }],
        },
    ])
});

/// Normalized signup payload, produced only by [`validate_signup`]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
}

/// Validate a raw signup body against the schema
///
/// On failure returns [`AuthError::Validation`] carrying the complete
/// ordered error list.
pub fn validate_signup(body: &Value) -> AuthResult<SignupData> {
    let normalized = SIGNUP_SCHEMA
        .evaluate(body)
        .map_err(AuthError::Validation)?;

    serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        AuthError::Internal(format!("normalized signup payload did not match schema: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldError;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "John Doe",
            "email": "john@example.com",
            "password": "Password123",
            "termsAccepted": true,
            "phoneNumber": "+1234567890",
            "about": "A test user",
        })
    }

    fn errors_for(body: Value) -> Vec<FieldError> {
        match validate_signup(&body) {
            Err(AuthError::Validation(details)) => details,
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_valid_payload() {
        let data = validate_signup(&valid_body()).unwrap();
        assert_eq!(data.name, "John Doe");
        assert_eq!(data.email, "john@example.com");
        assert_eq!(data.password, "Password123");
        assert!(data.terms_accepted);
        assert_eq!(data.phone_number.as_deref(), Some("+1234567890"));
        assert_eq!(data.about.as_deref(), Some("A test user"));
    }

    #[test]
    fn test_minimal_payload() {
        let data = validate_signup(&json!({
            "name": "John Doe",
            "email": "john@example.com",
            "password": "Password123",
            "termsAccepted": true,
        }))
        .unwrap();
        assert!(data.phone_number.is_none());
        assert!(data.about.is_none());
    }

    mod required_messages {
        use super::*;

        #[test]
        fn test_missing_name() {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove("name");
            assert!(errors_for(body).contains(&FieldError::new("name", "Name is required")));
        }

        #[test]
        fn test_missing_email() {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove("email");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new("email", "Email is required")]
            );
        }

        #[test]
        fn test_missing_password() {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove("password");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new("password", "Password is required")]
            );
        }

        #[test]
        fn test_missing_terms() {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove("termsAccepted");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "termsAccepted",
                    "Terms acceptance is required"
                )]
            );
        }
    }

    mod name_rules {
        use super::*;

        #[test]
        fn test_empty_name_fails_three_rules() {
            let mut body = valid_body();
            body["name"] = json!("");
            // required, min-length and the two-token rule all fire: the
            // custom rule does not short-circuit on required failures
            assert_eq!(
                errors_for(body),
                vec![
                    FieldError::new("name", "Name is required"),
                    FieldError::new("name", "Name must be at least 2 characters"),
                    FieldError::new("name", "Name must contain at least first and last name"),
                ]
            );
        }

        #[test]
        fn test_single_word_name() {
            let mut body = valid_body();
            body["name"] = json!("John");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "name",
                    "Name must contain at least first and last name"
                )]
            );
        }

        #[test]
        fn test_short_second_token() {
            let mut body = valid_body();
            body["name"] = json!("John D");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "name",
                    "Name must contain at least first and last name"
                )]
            );
        }

        #[test]
        fn test_multi_word_name_ok() {
            let mut body = valid_body();
            body["name"] = json!("John Michael Doe");
            assert!(validate_signup(&body).is_ok());
        }

        #[test]
        fn test_name_too_long() {
            let mut body = valid_body();
            body["name"] = json!(format!("Jo {}", "x".repeat(100)));
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "name",
                    "Name must be less than 100 characters"
                )]
            );
        }

        #[test]
        fn test_name_is_trimmed() {
            let mut body = valid_body();
            body["name"] = json!("  John   Doe  ");
            let data = validate_signup(&body).unwrap();
            assert_eq!(data.name, "John   Doe");
        }
    }

    mod email_rules {
        use super::*;

        #[test]
        fn test_invalid_email() {
            let mut body = valid_body();
            body["email"] = json!("invalid-email");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new("email", "Invalid email format")]
            );
        }

        #[test]
        fn test_empty_email_fails_required_and_format() {
            let mut body = valid_body();
            body["email"] = json!("");
            assert_eq!(
                errors_for(body),
                vec![
                    FieldError::new("email", "Email is required"),
                    FieldError::new("email", "Invalid email format"),
                ]
            );
        }

        #[test]
        fn test_email_without_tld() {
            let mut body = valid_body();
            body["email"] = json!("user@example");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new("email", "Invalid email format")]
            );
        }
    }

    mod password_rules {
        use super::*;

        #[test]
        fn test_short_password_fails_length_and_complexity() {
            let mut body = valid_body();
            body["password"] = json!("123");
            assert_eq!(
                errors_for(body),
                vec![
                    FieldError::new("password", "Password must be at least 8 characters"),
                    FieldError::new(
                        "password",
                        "Password must contain at least one uppercase letter, one lowercase letter, and one number"
                    ),
                ]
            );
        }

        #[test]
        fn test_no_uppercase_fails_complexity_only() {
            let mut body = valid_body();
            body["password"] = json!("password123");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "password",
                    "Password must contain at least one uppercase letter, one lowercase letter, and one number"
                )]
            );
        }

        #[test]
        fn test_no_digit_fails_complexity_only() {
            let mut body = valid_body();
            body["password"] = json!("PasswordOnly");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "password",
                    "Password must contain at least one uppercase letter, one lowercase letter, and one number"
                )]
            );
        }

        #[test]
        fn test_password_is_not_trimmed() {
            let mut body = valid_body();
            body["password"] = json!("  Password123  ");
            let data = validate_signup(&body).unwrap();
            assert_eq!(data.password, "  Password123  ");
        }
    }

    mod terms_rules {
        use super::*;

        #[test]
        fn test_terms_false() {
            let mut body = valid_body();
            body["termsAccepted"] = json!(false);
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "termsAccepted",
                    "You must accept the terms and conditions"
                )]
            );
        }

        #[test]
        fn test_terms_wrong_type_yields_single_error() {
            let mut body = valid_body();
            body["termsAccepted"] = json!("yes");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "termsAccepted",
                    "Terms acceptance must be a boolean"
                )]
            );
        }
    }

    mod optional_fields {
        use super::*;

        #[test]
        fn test_valid_phone_formats() {
            for phone in ["+1234567890", "123-456-7890", "(123) 456-7890", "123 456 7890"] {
                let mut body = valid_body();
                body["phoneNumber"] = json!(phone);
                let data = validate_signup(&body).unwrap();
                assert_eq!(data.phone_number.as_deref(), Some(phone));
            }
        }

        #[test]
        fn test_invalid_phone() {
            let mut body = valid_body();
            body["phoneNumber"] = json!("invalid-phone");
            assert_eq!(
                errors_for(body),
                vec![FieldError::new("phoneNumber", "Invalid phone number format")]
            );
        }

        #[test]
        fn test_about_at_limit() {
            let mut body = valid_body();
            body["about"] = json!("a".repeat(1000));
            assert!(validate_signup(&body).is_ok());
        }

        #[test]
        fn test_about_over_limit() {
            let mut body = valid_body();
            body["about"] = json!("a".repeat(1001));
            assert_eq!(
                errors_for(body),
                vec![FieldError::new(
                    "about",
                    "About section must be less than 1000 characters"
                )]
            );
        }
    }

    mod aggregation {
        use super::*;

        #[test]
        fn test_seven_errors_in_schema_order() {
            let body = json!({
                "name": "",
                "email": "invalid-email",
                "password": "123",
                "termsAccepted": false,
            });
            assert_eq!(
                errors_for(body),
                vec![
                    FieldError::new("name", "Name is required"),
                    FieldError::new("name", "Name must be at least 2 characters"),
                    FieldError::new("name", "Name must contain at least first and last name"),
                    FieldError::new("email", "Invalid email format"),
                    FieldError::new("password", "Password must be at least 8 characters"),
                    FieldError::new(
                        "password",
                        "Password must contain at least one uppercase letter, one lowercase letter, and one number"
                    ),
                    FieldError::new("termsAccepted", "You must accept the terms and conditions"),
                ]
            );
        }

        #[test]
        fn test_same_input_same_ordered_list() {
            let body = json!({
                "name": "",
                "email": "invalid-email",
                "password": "123",
                "termsAccepted": false,
            });
            assert_eq!(errors_for(body.clone()), errors_for(body));
        }

        #[test]
        fn test_type_mismatch_on_name_yields_single_name_error() {
            let mut body = valid_body();
            body["name"] = json!(42);
            assert_eq!(
                errors_for(body),
                vec![FieldError::new("name", "Name must be a string")]
            );
        }

        #[test]
        fn test_empty_body_reports_each_required_field_once() {
            // A missing field emits exactly its required-message; the other
            // rules only run on present values
            assert_eq!(
                errors_for(json!({})),
                vec![
                    FieldError::new("name", "Name is required"),
                    FieldError::new("email", "Email is required"),
                    FieldError::new("password", "Password is required"),
                    FieldError::new("termsAccepted", "Terms acceptance is required"),
                ]
            );
        }
    }
}
