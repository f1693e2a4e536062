//! Combinators that wrap and adapt rules.

pub mod skip_empty;

pub use skip_empty::{SkipEmpty, skip_empty};
