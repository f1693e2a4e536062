//! Presence rule
//!
//! A value is present when it is non-empty. Absent fields are handed to the
//! rule as the empty string by the field layer, so both fail the same way.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content: `" "` passes.
    pub Required for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn required();
}
