//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Rules are generic over their input type and report failures as structured
//! errors:
//!
//! ```
//! use loginkit_validator::foundation::ValidationError;
//!
//! let error = ValidationError::new("min_length", "Too short")
//!     .with_field("password")
//!     .with_param("min", "5");
//! assert_eq!(error.code, "min_length");
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
