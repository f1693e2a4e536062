//! Built-in string rules
//!
//! - [`Required`]: the value is non-empty
//! - [`Email`]: the value looks like an email address
//! - [`MinLength`]: the value has at least `min` characters
//!
//! These check a bare string. Field-bound validators in [`crate::field`]
//! decide how absent and empty values reach them.

pub mod email;
pub mod length;
pub mod required;

pub use email::{Email, email};
pub use length::{MinLength, min_length};
pub use required::{Required, required};
