//! Fluent builder for a field's validator list
//!
//! ```
//! use loginkit_validator::builder::ValidationBuilder;
//! use loginkit_validator::field::{FieldValidator, MinLengthValidation, RequiredFieldValidation};
//!
//! let list = ValidationBuilder::field("age").required().min(2).build();
//! assert_eq!(
//!     list.as_slice(),
//!     [
//!         FieldValidator::from(RequiredFieldValidation::new("age")),
//!         FieldValidator::from(MinLengthValidation::new("age", 2)),
//!     ]
//! );
//! ```

use crate::field::{
    EmailValidation, FieldValidator, MinLengthValidation, RequiredFieldValidation, ValidatorList,
};

/// Accumulates validators for one field, in call order.
///
/// `build` consumes the builder; start another list with
/// [`ValidationBuilder::field`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "builders do nothing unless `build` is called"]
pub struct ValidationBuilder {
    field: String,
    validators: Vec<FieldValidator>,
}

impl ValidationBuilder {
    /// Starts a builder bound to `name`.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            validators: Vec::new(),
        }
    }

    /// Appends a required-field validator.
    pub fn required(mut self) -> Self {
        self.validators
            .push(RequiredFieldValidation::new(self.field.clone()).into());
        self
    }

    /// Appends an email-format validator.
    pub fn email(mut self) -> Self {
        self.validators
            .push(EmailValidation::new(self.field.clone()).into());
        self
    }

    /// Appends a minimum-length validator.
    pub fn min(mut self, length: usize) -> Self {
        self.validators
            .push(MinLengthValidation::new(self.field.clone(), length).into());
        self
    }

    /// Finishes the chain and returns the validators in call order.
    pub fn build(self) -> ValidatorList {
        ValidatorList::from(self.validators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required() {
        let list = ValidationBuilder::field("any_field").required().build();
        assert_eq!(
            list,
            ValidatorList::from(vec![RequiredFieldValidation::new("any_field").into()])
        );
    }

    #[test]
    fn test_email() {
        let list = ValidationBuilder::field("any_field").email().build();
        assert_eq!(
            list,
            ValidatorList::from(vec![EmailValidation::new("any_field").into()])
        );
    }

    #[test]
    fn test_min() {
        let list = ValidationBuilder::field("any_field").min(5).build();
        assert_eq!(
            list,
            ValidatorList::from(vec![MinLengthValidation::new("any_field", 5).into()])
        );
    }

    #[test]
    fn test_chain_preserves_call_order() {
        let list = ValidationBuilder::field("any_field")
            .min(5)
            .email()
            .required()
            .build();
        assert_eq!(
            list,
            ValidatorList::from(vec![
                MinLengthValidation::new("any_field", 5).into(),
                EmailValidation::new("any_field").into(),
                RequiredFieldValidation::new("any_field").into(),
            ])
        );
    }

    #[test]
    fn test_no_rules_builds_empty_list() {
        let list = ValidationBuilder::field("any_field").build();
        assert!(list.is_empty());
    }

    #[test]
    fn test_repeated_rules_are_kept() {
        let list = ValidationBuilder::field("f").min(2).min(4).build();
        assert_eq!(list.len(), 2);
    }
}
