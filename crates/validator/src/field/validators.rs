use super::{FieldValidation, FieldValues};
use crate::combinators::SkipEmpty;
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::validators::{Email, MinLength, Required};

/// Runs a string rule against the bound field, absent treated as empty.
fn check_field<V>(field: &str, rule: &V, values: &FieldValues) -> Result<(), ValidationError>
where
    V: Validate<Input = str>,
{
    let value = values.get(field).unwrap_or_default();
    rule.validate(value)
        .map_err(|err| err.with_field(field.to_owned()))
}

// ============================================================================
// REQUIRED
// ============================================================================

/// Fails when the field is absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredFieldValidation {
    field: String,
    rule: Required,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: Required,
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &FieldValues) -> Result<(), ValidationError> {
        check_field(&self.field, &self.rule, values)
    }
}

// ============================================================================
// EMAIL
// ============================================================================

/// Fails when the field holds a non-empty value that is not an email address.
///
/// Absent and empty values pass; combine with [`RequiredFieldValidation`]
/// to demand a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailValidation {
    field: String,
    rule: SkipEmpty<Email>,
}

impl EmailValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: Email.skip_empty(),
        }
    }
}

impl FieldValidation for EmailValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &FieldValues) -> Result<(), ValidationError> {
        check_field(&self.field, &self.rule, values)
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Fails when the field holds a non-empty value shorter than `min` characters.
///
/// Empty and absent values pass so that the required check is not reported
/// twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinLengthValidation {
    field: String,
    rule: SkipEmpty<MinLength>,
}

impl MinLengthValidation {
    pub fn new(field: impl Into<String>, min: usize) -> Self {
        Self {
            field: field.into(),
            rule: MinLength::new(min).skip_empty(),
        }
    }

    /// Minimum number of characters.
    pub fn min(&self) -> usize {
        self.rule.inner().min
    }
}

impl FieldValidation for MinLengthValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &FieldValues) -> Result<(), ValidationError> {
        check_field(&self.field, &self.rule, values)
    }
}

// ============================================================================
// CLOSED SET
// ============================================================================

/// Any of the built-in field validators.
///
/// This is what a [`ValidatorList`](super::ValidatorList) holds, so built
/// lists compare by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValidator {
    Required(RequiredFieldValidation),
    Email(EmailValidation),
    MinLength(MinLengthValidation),
}

impl FieldValidator {
    /// Short name of the rule kind, as used in rule schemas.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required(_) => "required",
            Self::Email(_) => "email",
            Self::MinLength(_) => "min",
        }
    }
}

impl FieldValidation for FieldValidator {
    fn field(&self) -> &str {
        match self {
            Self::Required(v) => v.field(),
            Self::Email(v) => v.field(),
            Self::MinLength(v) => v.field(),
        }
    }

    fn validate(&self, values: &FieldValues) -> Result<(), ValidationError> {
        match self {
            Self::Required(v) => v.validate(values),
            Self::Email(v) => v.validate(values),
            Self::MinLength(v) => v.validate(values),
        }
    }
}

impl From<RequiredFieldValidation> for FieldValidator {
    fn from(v: RequiredFieldValidation) -> Self {
        Self::Required(v)
    }
}

impl From<EmailValidation> for FieldValidator {
    fn from(v: EmailValidation) -> Self {
        Self::Email(v)
    }
}

impl From<MinLengthValidation> for FieldValidator {
    fn from(v: MinLengthValidation) -> Self {
        Self::MinLength(v)
    }
}
