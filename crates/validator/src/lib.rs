//! # loginkit-validator
//!
//! Field validation for login forms, built from small composable validators.
//!
//! ## Quick Start
//!
//! ```
//! use loginkit_validator::prelude::*;
//!
//! let composite = ValidationComposite::build([
//!     ValidationBuilder::field("email").required().email().build(),
//!     ValidationBuilder::field("password").required().min(5).build(),
//! ]);
//!
//! let values = FieldValues::from([("email", "not-an-email"), ("password", "")]);
//! assert_eq!(composite.validate("email", &values).as_deref(), Some("Invalid email address"));
//! assert_eq!(composite.validate("password", &values).as_deref(), Some("This field is required"));
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: string rules ([`Required`](validators::Required),
//!   [`Email`](validators::Email), [`MinLength`](validators::MinLength))
//!   implementing [`Validate`](foundation::Validate)
//! - [`field`]: the same rules bound to a named field and read from
//!   [`FieldValues`](field::FieldValues)
//! - [`builder`]: the fluent [`ValidationBuilder`](builder::ValidationBuilder)
//! - [`composite`]: first-error-per-field [`ValidationComposite`](composite::ValidationComposite)
//! - [`schema`]: the same lists declared in JSON

pub mod builder;
pub mod combinators;
pub mod composite;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
