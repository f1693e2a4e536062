//! Prelude module for convenient imports.
//!
//! ```
//! use loginkit_validator::prelude::*;
//!
//! let list = ValidationBuilder::field("email").required().email().build();
//! let composite = ValidationComposite::build([list]);
//! assert!(composite.validate("email", &FieldValues::new()).is_some());
//! ```

pub use crate::builder::ValidationBuilder;
pub use crate::combinators::{SkipEmpty, skip_empty};
pub use crate::composite::{Validation, ValidationComposite};
pub use crate::field::{
    EmailValidation, FieldValidation, FieldValidator, FieldValues, MinLengthValidation,
    RequiredFieldValidation, ValidatorList,
};
pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};
pub use crate::schema::{FormSchema, SchemaError};
pub use crate::validators::{Email, MinLength, Required, email, min_length, required};
