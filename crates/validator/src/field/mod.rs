//! Field-bound validators
//!
//! A field validator knows the name of the form field it checks and reads
//! that field's value out of the full set of [`FieldValues`]. An absent field
//! is treated exactly like an empty one.
//!
//! # Examples
//!
//! ```
//! use loginkit_validator::field::{FieldValidation, FieldValues, RequiredFieldValidation};
//!
//! let values = FieldValues::new().with("email", "");
//! let err = RequiredFieldValidation::new("email").validate(&values).unwrap_err();
//! assert_eq!(err.field.as_deref(), Some("email"));
//! ```

mod list;
mod validators;
mod values;

pub use list::ValidatorList;
pub use validators::{EmailValidation, FieldValidator, MinLengthValidation, RequiredFieldValidation};
pub use values::FieldValues;

use crate::foundation::ValidationError;

/// A validator bound to one named field.
///
/// Implementations are pure: the result depends only on the bound field name,
/// the validator's own arguments and the value found in `values`.
pub trait FieldValidation {
    /// Name of the field this validator checks.
    fn field(&self) -> &str;

    /// Validates the bound field inside `values`.
    ///
    /// The returned error carries the field name.
    fn validate(&self, values: &FieldValues) -> Result<(), ValidationError>;
}
