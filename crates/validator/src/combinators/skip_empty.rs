//! SKIP_EMPTY combinator - run a string rule only on non-empty input
//!
//! Format rules (email, minimum length) leave empty values alone so that an
//! optional field validates cleanly unless it is also marked required.
//!
//! # Examples
//!
//! ```
//! use loginkit_validator::combinators::SkipEmpty;
//! use loginkit_validator::foundation::Validate;
//! use loginkit_validator::validators::email;
//!
//! let validator = SkipEmpty::new(email());
//! assert!(validator.validate("").is_ok()); // skipped
//! assert!(validator.validate("nope").is_err()); // validated, fails
//! assert!(validator.validate("user@example.com").is_ok());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Applies the inner rule only when the input is non-empty.
///
/// Equality follows the inner rule, so two `SkipEmpty` wrappers around equal
/// rules compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkipEmpty<V> {
    pub(crate) inner: V,
}

impl<V> SkipEmpty<V> {
    /// Wraps a rule.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for SkipEmpty<V>
where
    V: Validate<Input = str>,
{
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            Ok(())
        } else {
            self.inner.validate(input)
        }
    }
}

/// Creates a `SkipEmpty` combinator.
pub fn skip_empty<V>(validator: V) -> SkipEmpty<V> {
    SkipEmpty::new(validator)
}
