//! Email format rule

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

crate::validator! {
    /// Validates email format.
    ///
    /// Requires a dot-atom local part (no leading, trailing or repeated
    /// dots), an `@` and a dotted domain. The pattern is compiled once per
    /// process.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_email() }
    fn email();
}
