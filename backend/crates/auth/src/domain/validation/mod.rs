//! Declarative Request Validation
//!
//! A schema is an ordered list of per-field rule sets evaluated against a
//! raw JSON body. Evaluation never stops early across fields, and never
//! stops early across independent rules on the same field: an empty
//! required string fails "required", "min length" and any custom rule all
//! at once. The single exception is a type mismatch (a number where a
//! string is expected), which yields one error and suppresses the
//! remaining rules for that field only.
//!
//! ## Per-field evaluation
//! 1. Missing or `null`: required fields emit their required-message,
//!    optional fields emit nothing; no other rules run.
//! 2. Wrong JSON type: exactly one type-mismatch error.
//! 3. Right type: trim if the schema says so, then every rule runs and
//!    every failure is recorded, in declaration order.
//!
//! On success the engine returns the normalized body (trimmed strings,
//! typed booleans, absent optionals omitted); on failure, the complete
//! ordered error list. Evaluation is a pure function of schema and input,
//! so the same invalid body always produces the same list.

pub mod signup;

pub use signup::{SignupData, validate_signup};

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// Field Errors
// ============================================================================

/// A single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Expected JSON type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string
    Text,
    /// JSON boolean
    Flag,
}

/// A single validation rule
///
/// Rules are tagged variants, not closures over exceptions: each one is
/// checked independently so a field can accumulate several failures.
#[derive(Debug)]
pub enum Rule {
    /// Value must be present and, for text, non-empty
    Required { message: &'static str },
    /// Minimum length in characters
    MinLength { min: usize, message: &'static str },
    /// Maximum length in characters
    MaxLength { max: usize, message: &'static str },
    /// Text must match the pattern
    Pattern { pattern: Regex, message: &'static str },
    /// Flag must be `true`
    MustBeTrue { message: &'static str },
    /// Arbitrary predicate over the (trimmed) text
    Custom {
        check: fn(&str) -> bool,
        message: &'static str,
    },
}

impl Rule {
    fn message(&self) -> &'static str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::MustBeTrue { message }
            | Rule::Custom { message, .. } => message,
        }
    }

    /// Check against a text value; `Some(message)` on failure
    fn check_text(&self, value: &str) -> Option<&'static str> {
        let failed = match self {
            Rule::Required { .. } => value.is_empty(),
            Rule::MinLength { min, .. } => value.chars().count() < *min,
            Rule::MaxLength { max, .. } => value.chars().count() > *max,
            Rule::Pattern { pattern, .. } => !pattern.is_match(value),
            Rule::Custom { check, .. } => !check(value),
            // Flag-only rule, vacuously satisfied by text
            Rule::MustBeTrue { .. } => false,
        };
        failed.then(|| self.message())
    }

    /// Check against a flag value; `Some(message)` on failure
    fn check_flag(&self, value: bool) -> Option<&'static str> {
        match self {
            Rule::MustBeTrue { .. } if !value => Some(self.message()),
            // A present boolean satisfies Required regardless of value
            _ => None,
        }
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Rule set for one field
#[derive(Debug)]
pub struct FieldRules {
    /// JSON key in the request body
    pub field: &'static str,
    /// Expected JSON type
    pub kind: FieldKind,
    /// Trim text before rule evaluation and in the normalized output
    pub trim: bool,
    /// Error emitted on a JSON type mismatch
    pub type_message: &'static str,
    /// Rules, evaluated in order
    pub rules: Vec<Rule>,
}

impl FieldRules {
    /// The required-message, if this field carries a `Required` rule
    fn required_message(&self) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::Required { message } => Some(*message),
            _ => None,
        })
    }
}

/// Ordered field schema
#[derive(Debug)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Evaluate a raw JSON body against the schema
    ///
    /// A non-object body evaluates as an empty object, so every required
    /// field reports missing.
    pub fn evaluate(&self, body: &Value) -> Result<Map<String, Value>, Vec<FieldError>> {
        let empty = Map::new();
        let object = body.as_object().unwrap_or(&empty);

        let mut errors = Vec::new();
        let mut normalized = Map::new();

        for field in &self.fields {
            match object.get(field.field) {
                None | Some(Value::Null) => {
                    if let Some(message) = field.required_message() {
                        errors.push(FieldError::new(field.field, message));
                    }
                }
                Some(value) => match (field.kind, value) {
                    (FieldKind::Text, Value::String(raw)) => {
                        let text = if field.trim { raw.trim() } else { raw.as_str() };
                        for rule in &field.rules {
                            if let Some(message) = rule.check_text(text) {
                                errors.push(FieldError::new(field.field, message));
                            }
                        }
                        normalized
                            .insert(field.field.to_string(), Value::String(text.to_string()));
                    }
                    (FieldKind::Flag, Value::Bool(flag)) => {
                        for rule in &field.rules {
                            if let Some(message) = rule.check_flag(*flag) {
                                errors.push(FieldError::new(field.field, message));
                            }
                        }
                        normalized.insert(field.field.to_string(), Value::Bool(*flag));
                    }
                    _ => {
                        // Type mismatch suppresses the remaining rules for
                        // this field only
                        errors.push(FieldError::new(field.field, field.type_message));
                    }
                },
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_schema() -> Schema {
        Schema::new(vec![
            FieldRules {
                field: "title",
                kind: FieldKind::Text,
                trim: true,
                type_message: "Title must be a string",
                rules: vec![
                    Rule::Required {
                        message: "Title is required",
                    },
                    Rule::MinLength {
                        min: 3,
                        message: "Title too short",
                    },
                ],
            },
            FieldRules {
                field: "note",
                kind: FieldKind::Text,
                trim: false,
                type_message: "Note must be a string",
                rules: vec![Rule::MaxLength {
                    max: 5,
                    message: "Note too long",
                }],
            },
            FieldRules {
                field: "agreed",
                kind: FieldKind::Flag,
                trim: false,
                type_message: "Agreed must be a boolean",
                rules: vec![
                    Rule::Required {
                        message: "Agreed is required",
                    },
                    Rule::MustBeTrue {
                        message: "Agreed must be true",
                    },
                ],
            },
        ])
    }

    #[test]
    fn test_success_normalizes_and_trims() {
        let normalized = test_schema()
            .evaluate(&json!({"title": "  hello  ", "agreed": true}))
            .unwrap();
        assert_eq!(normalized.get("title"), Some(&json!("hello")));
        assert_eq!(normalized.get("agreed"), Some(&json!(true)));
        // Absent optional is omitted from the normalized output
        assert!(!normalized.contains_key("note"));
    }

    #[test]
    fn test_empty_required_text_accumulates_all_rules() {
        let errors = test_schema()
            .evaluate(&json!({"title": "", "agreed": true}))
            .unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("title", "Title is required"),
                FieldError::new("title", "Title too short"),
            ]
        );
    }

    #[test]
    fn test_missing_required_emits_only_required() {
        let errors = test_schema().evaluate(&json!({"agreed": true})).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("title", "Title is required")]);
    }

    #[test]
    fn test_null_is_treated_as_missing() {
        let errors = test_schema()
            .evaluate(&json!({"title": null, "agreed": true}))
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("title", "Title is required")]);
    }

    #[test]
    fn test_missing_optional_is_skipped() {
        assert!(
            test_schema()
                .evaluate(&json!({"title": "abc", "agreed": true}))
                .is_ok()
        );
    }

    #[test]
    fn test_type_mismatch_suppresses_remaining_rules() {
        let errors = test_schema()
            .evaluate(&json!({"title": 42, "agreed": true}))
            .unwrap_err();
        // One error only, even though Required and MinLength would both fail
        assert_eq!(errors, vec![FieldError::new("title", "Title must be a string")]);
    }

    #[test]
    fn test_flag_type_mismatch() {
        let errors = test_schema()
            .evaluate(&json!({"title": "abc", "agreed": "yes"}))
            .unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::new("agreed", "Agreed must be a boolean")]
        );
    }

    #[test]
    fn test_present_false_flag_fails_must_be_true_only() {
        let errors = test_schema()
            .evaluate(&json!({"title": "abc", "agreed": false}))
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("agreed", "Agreed must be true")]);
    }

    #[test]
    fn test_errors_follow_schema_declaration_order() {
        let errors = test_schema()
            .evaluate(&json!({"note": "toolong", "agreed": false}))
            .unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("title", "Title is required"),
                FieldError::new("note", "Note too long"),
                FieldError::new("agreed", "Agreed must be true"),
            ]
        );
    }

    #[test]
    fn test_non_object_body_reports_all_required() {
        let errors = test_schema().evaluate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("title", "Title is required"),
                FieldError::new("agreed", "Agreed is required"),
            ]
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let body = json!({"title": "", "note": "toolong", "agreed": false});
        let schema = test_schema();
        assert_eq!(schema.evaluate(&body), schema.evaluate(&body));
    }

    #[test]
    fn test_length_rules_count_characters_not_bytes() {
        // Three characters, nine bytes
        let errors = test_schema().evaluate(&json!({"title": "日本語", "agreed": true}));
        assert!(errors.is_ok());
    }
}
