use super::{FieldValidation, FieldValidator, FieldValues};
use crate::foundation::ValidationError;

/// An ordered, immutable list of field validators.
///
/// Order is declaration order; the first failing validator wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorList {
    validators: Vec<FieldValidator>,
}

impl ValidatorList {
    /// Returns the validators in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldValidator] {
        &self.validators
    }

    /// Iterates over the validators in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldValidator> {
        self.validators.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every validator in order and returns the first failure.
    ///
    /// An empty list always passes.
    pub fn first_error(&self, values: &FieldValues) -> Option<ValidationError> {
        self.validators
            .iter()
            .find_map(|validator| validator.validate(values).err())
    }
}

impl From<Vec<FieldValidator>> for ValidatorList {
    fn from(validators: Vec<FieldValidator>) -> Self {
        Self { validators }
    }
}

impl FromIterator<FieldValidator> for ValidatorList {
    fn from_iter<I: IntoIterator<Item = FieldValidator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidatorList {
    type Item = FieldValidator;
    type IntoIter = std::vec::IntoIter<FieldValidator>;

    fn into_iter(self) -> Self::IntoIter {
        self.validators.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidatorList {
    type Item = &'a FieldValidator;
    type IntoIter = std::slice::Iter<'a, FieldValidator>;

    fn into_iter(self) -> Self::IntoIter {
        self.validators.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{EmailValidation, MinLengthValidation, RequiredFieldValidation};

    #[test]
    fn test_empty_list_always_passes() {
        let list = ValidatorList::default();
        assert!(list.is_empty());
        assert_eq!(list.first_error(&FieldValues::new()), None);
    }

    #[test]
    fn test_first_failure_wins() {
        let list = ValidatorList::from(vec![
            MinLengthValidation::new("email", 10).into(),
            EmailValidation::new("email").into(),
        ]);
        let err = list
            .first_error(&FieldValues::from([("email", "bad")]))
            .unwrap();
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn test_collect_preserves_order() {
        let list: ValidatorList = [
            FieldValidator::from(RequiredFieldValidation::new("email")),
            FieldValidator::from(EmailValidation::new("email")),
        ]
        .into_iter()
        .collect();
        let kinds: Vec<_> = list.iter().map(FieldValidator::kind).collect();
        assert_eq!(kinds, ["required", "email"]);
        assert_eq!(list.len(), 2);
    }
}
