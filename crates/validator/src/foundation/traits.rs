//! Core traits for the validation system
//!
//! [`Validate`] checks a single value against a single rule. Field-bound
//! validators (see [`crate::field`]) are built on top of it.

use crate::combinators::SkipEmpty;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all value rules implement.
///
/// # Examples
///
/// ```
/// use loginkit_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("alice").is_ok());
/// assert!(NoSpaces.validate("al ice").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for string rules.
///
/// Automatically implemented for every `Validate<Input = str>`.
pub trait ValidateExt: Validate<Input = str> + Sized {
    /// Only runs the rule when the input is non-empty.
    ///
    /// ```
    /// use loginkit_validator::prelude::*;
    ///
    /// let rule = min_length(5).skip_empty();
    /// assert!(rule.validate("").is_ok());
    /// assert!(rule.validate("abc").is_err());
    /// ```
    fn skip_empty(self) -> SkipEmpty<Self> {
        SkipEmpty::new(self)
    }
}

impl<T: Validate<Input = str>> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
