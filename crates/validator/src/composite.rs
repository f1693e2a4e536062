//! First-error composite over many fields' validator lists
//!
//! [`ValidationComposite`] is what a form calls on every change: given a
//! field name and the current values, it returns the message of the first
//! failing validator for that field, or `None`.
//!
//! ```
//! use loginkit_validator::prelude::*;
//!
//! let composite = ValidationComposite::build([
//!     ValidationBuilder::field("email").required().email().build(),
//!     ValidationBuilder::field("password").required().min(5).build(),
//! ]);
//!
//! let values = FieldValues::from([("email", "user@example.com"), ("password", "abc")]);
//! assert_eq!(composite.validate("email", &values), None);
//! assert_eq!(
//!     composite.validate("password", &values).as_deref(),
//!     Some("Must be at least 5 characters")
//! );
//! ```

use crate::field::{FieldValidation, FieldValidator, FieldValues, ValidatorList};
use crate::foundation::ValidationError;

// ============================================================================
// VALIDATION PROTOCOL
// ============================================================================

/// What a form needs from its validation layer.
///
/// Returns the message to display for `field`, or `None` when the field is
/// valid.
pub trait Validation {
    fn validate(&self, field: &str, values: &FieldValues) -> Option<String>;
}

impl<T: Validation + ?Sized> Validation for &T {
    fn validate(&self, field: &str, values: &FieldValues) -> Option<String> {
        (**self).validate(field, values)
    }
}

impl<T: Validation + ?Sized> Validation for Box<T> {
    fn validate(&self, field: &str, values: &FieldValues) -> Option<String> {
        (**self).validate(field, values)
    }
}

// ============================================================================
// COMPOSITE
// ============================================================================

/// Validators for any number of fields, evaluated first-failure-wins per field.
///
/// Lists for the same field registered more than once are concatenated in
/// registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationComposite {
    validators: Vec<FieldValidator>,
}

impl ValidationComposite {
    /// Builds a composite from finished validator lists.
    pub fn build(lists: impl IntoIterator<Item = ValidatorList>) -> Self {
        Self {
            validators: lists.into_iter().flatten().collect(),
        }
    }

    /// Validators registered for `field`, in order.
    pub fn validators_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a FieldValidator> + 'a {
        self.validators.iter().filter(move |v| v.field() == field)
    }

    /// Field names in first-registration order, without duplicates.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for validator in &self.validators {
            if !fields.contains(&validator.field()) {
                fields.push(validator.field());
            }
        }
        fields
    }

    /// Returns the first structured error for `field`, if any.
    ///
    /// A field without validators is always valid.
    pub fn first_error(&self, field: &str, values: &FieldValues) -> Option<ValidationError> {
        let error = self
            .validators_for(field)
            .find_map(|validator| validator.validate(values).err());
        if let Some(err) = &error {
            tracing::trace!(field, code = %err.code, "field validation failed");
        }
        error
    }

    /// Returns the first error of every registered field that fails.
    pub fn validate_all(&self, values: &FieldValues) -> Vec<ValidationError> {
        self.fields()
            .into_iter()
            .filter_map(|field| self.first_error(field, values))
            .collect()
    }

    /// Returns true when every registered field passes.
    pub fn is_valid(&self, values: &FieldValues) -> bool {
        self.fields()
            .into_iter()
            .all(|field| self.first_error(field, values).is_none())
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, field: &str, values: &FieldValues) -> Option<String> {
        self.first_error(field, values)
            .map(ValidationError::into_message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ValidationBuilder;
    use pretty_assertions::assert_eq;

    fn login_composite() -> ValidationComposite {
        ValidationComposite::build([
            ValidationBuilder::field("email").required().email().build(),
            ValidationBuilder::field("password").required().min(5).build(),
        ])
    }

    #[test]
    fn test_valid_values_pass() {
        let values = FieldValues::from([("email", "user@example.com"), ("password", "12345")]);
        let composite = login_composite();
        assert_eq!(composite.validate("email", &values), None);
        assert_eq!(composite.validate("password", &values), None);
        assert!(composite.is_valid(&values));
    }

    #[test]
    fn test_required_reported_first() {
        let composite = ValidationComposite::build([ValidationBuilder::field("email")
            .required()
            .min(5)
            .email()
            .build()]);
        let values = FieldValues::from([("email", "")]);
        assert_eq!(
            composite.validate("email", &values).as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn test_unknown_field_is_valid() {
        let composite = login_composite();
        assert_eq!(composite.validate("username", &FieldValues::new()), None);
    }

    #[test]
    fn test_same_field_lists_are_concatenated() {
        let composite = ValidationComposite::build([
            ValidationBuilder::field("email").email().build(),
            ValidationBuilder::field("email").required().build(),
        ]);
        let kinds: Vec<_> = composite
            .validators_for("email")
            .map(FieldValidator::kind)
            .collect();
        assert_eq!(kinds, ["email", "required"]);
        assert_eq!(composite.fields(), ["email"]);
    }

    #[test]
    fn test_validate_all_in_registration_order() {
        let composite = login_composite();
        let errors = composite.validate_all(&FieldValues::from([("email", "x"), ("password", "")]));
        let summary: Vec<_> = errors
            .iter()
            .map(|e| (e.field.as_deref().unwrap_or_default(), e.code.as_ref()))
            .collect();
        assert_eq!(summary, [("email", "invalid_email"), ("password", "required")]);
    }

    #[test]
    fn test_validation_through_reference() {
        fn message(validation: impl Validation) -> Option<String> {
            validation.validate("password", &FieldValues::new())
        }
        let composite = login_composite();
        assert_eq!(message(&composite).as_deref(), Some("This field is required"));
    }
}
