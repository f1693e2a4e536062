//! String length rule
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! five characters.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_length_valid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello world").is_ok());
    }

    #[test]
    fn test_min_length_invalid() {
        let err = min_length(5).validate("hi").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.message, "Must be at least 5 characters");
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn test_min_length_rejects_empty() {
        // the field layer decides whether empty values reach this rule
        assert!(min_length(1).validate("").is_err());
    }

    #[test]
    fn test_min_length_zero_accepts_everything() {
        assert!(min_length(0).validate("").is_ok());
    }

    #[test]
    fn test_unicode_handling() {
        assert_eq!("h\u{e9}llo".len(), 6);
        assert!(min_length(5).validate("h\u{e9}llo").is_ok());
        assert!(min_length(5).validate("\u{1f44b}\u{1f30d}").is_err());
    }

    #[test]
    fn test_equality() {
        assert_eq!(min_length(3), MinLength { min: 3 });
        assert_ne!(min_length(3), min_length(4));
    }
}
