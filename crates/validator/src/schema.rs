//! Declarative rule schemas
//!
//! A [`FormSchema`] lists, per field, the rules the builder would otherwise
//! be asked for in code. It deserializes from JSON and compiles into a
//! [`ValidationComposite`]:
//!
//! ```
//! use loginkit_validator::prelude::*;
//! use loginkit_validator::schema::FormSchema;
//!
//! let schema = FormSchema::from_json(r#"{
//!     "fields": [
//!         { "name": "email",    "rules": ["required", "email"] },
//!         { "name": "password", "rules": ["required", { "min": 5 }] }
//!     ]
//! }"#).unwrap();
//!
//! let composite = schema.compile();
//! let values = FieldValues::from([("email", ""), ("password", "abc")]);
//! assert_eq!(composite.validate("email", &values).as_deref(), Some("This field is required"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::builder::ValidationBuilder;
use crate::composite::ValidationComposite;

// ============================================================================
// ERRORS
// ============================================================================

/// Error raised while loading a rule schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document is not valid JSON or does not have the schema's shape.
    #[error("invalid schema document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries name the same field.
    #[error("field `{field}` is declared more than once")]
    DuplicateField { field: String },

    /// A field entry has an empty name.
    #[error("field entry #{index} has an empty name")]
    EmptyFieldName { index: usize },

    /// A rule's arguments make no sense.
    #[error("invalid rule for `{field}`: {reason}")]
    InvalidRule { field: String, reason: String },
}

impl SchemaError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "SCHEMA_PARSE",
            Self::DuplicateField { .. } => "SCHEMA_DUPLICATE_FIELD",
            Self::EmptyFieldName { .. } => "SCHEMA_EMPTY_FIELD_NAME",
            Self::InvalidRule { .. } => "SCHEMA_INVALID_RULE",
        }
    }
}

// ============================================================================
// SCHEMA TYPES
// ============================================================================

/// One rule request, as written in a schema.
///
/// Unit rules are plain strings (`"required"`, `"email"`); rules with
/// arguments are single-key objects (`{"min": 5}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSpec {
    Required,
    Email,
    Min(usize),
}

/// Rules for one field, in evaluation order.
///
/// Unknown keys are rejected, so a misspelled `rules` key fails to load
/// instead of leaving the field unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// Rules for a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Parses and checks a JSON schema document.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)?;
        schema.check()?;
        Ok(schema)
    }

    /// Rejects empty or duplicate field names and zero minimum lengths.
    pub fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName { index });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    field: field.name.clone(),
                });
            }
            if field.rules.contains(&RuleSpec::Min(0)) {
                return Err(SchemaError::InvalidRule {
                    field: field.name.clone(),
                    reason: "`min` must be at least 1".to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Builds the composite, one builder chain per field.
    pub fn compile(&self) -> ValidationComposite {
        let lists = self.fields.iter().map(|field| {
            if field.rules.is_empty() {
                tracing::warn!(field = %field.name, "schema field declares no rules");
            }
            field
                .rules
                .iter()
                .fold(ValidationBuilder::field(field.name.clone()), |builder, rule| {
                    match *rule {
                        RuleSpec::Required => builder.required(),
                        RuleSpec::Email => builder.email(),
                        RuleSpec::Min(length) => builder.min(length),
                    }
                })
                .build()
        });
        let composite = ValidationComposite::build(lists);
        tracing::debug!(fields = self.fields.len(), "compiled validation schema");
        composite
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_spec_shapes() {
        let rules: Vec<RuleSpec> =
            serde_json::from_str(r#"["required", "email", {"min": 3}]"#).unwrap();
        assert_eq!(
            rules,
            [RuleSpec::Required, RuleSpec::Email, RuleSpec::Min(3)]
        );
    }

    #[test]
    fn test_unknown_rule_is_parse_error() {
        let err = FormSchema::from_json(r#"{"fields": [{"name": "a", "rules": ["max"]}]}"#)
            .unwrap_err();
        assert_eq!(err.code(), "SCHEMA_PARSE");
    }

    #[test]
    fn test_misspelled_rules_key_is_parse_error() {
        let err = FormSchema::from_json(
            r#"{"fields": [{"name": "password", "rule": ["required", {"min": 5}]}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "SCHEMA_PARSE");
        assert!(err.to_string().contains("unknown field `rule`"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = FormSchema::from_json(
            r#"{"fields": [{"name": "a", "rules": []}, {"name": "a", "rules": ["email"]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref field } if field == "a"));
        assert_eq!(err.to_string(), "field `a` is declared more than once");
    }

    #[test]
    fn test_zero_min_rejected() {
        let err = FormSchema::from_json(r#"{"fields": [{"name": "a", "rules": [{"min": 0}]}]}"#)
            .unwrap_err();
        assert_eq!(err.code(), "SCHEMA_INVALID_RULE");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = FormSchema::from_json(r#"{"fields": [{"name": ""}]}"#).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyFieldName { index: 0 }));
    }

    #[test]
    fn test_missing_rules_default_to_empty() {
        let schema = FormSchema::from_json(r#"{"fields": [{"name": "nickname"}]}"#).unwrap();
        assert!(schema.fields[0].rules.is_empty());
        assert!(schema.compile().fields().is_empty());
    }
}
