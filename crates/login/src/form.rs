//! Login form state
//!
//! [`LoginForm`] keeps the two field values, re-validates both on every
//! change, and gates submission on validity and on the loading flag.

use loginkit_validator::builder::ValidationBuilder;
use loginkit_validator::composite::{Validation, ValidationComposite};
use loginkit_validator::field::FieldValues;

use crate::auth::{AccessTokenStore, Authentication, AuthenticationParams};
use crate::error::SubmitError;

/// Name of the email field.
pub const EMAIL_FIELD: &str = "email";
/// Name of the password field.
pub const PASSWORD_FIELD: &str = "password";

/// Validation used by the login page: email required and well-formed,
/// password required with at least five characters.
pub fn make_login_validation() -> ValidationComposite {
    ValidationComposite::build([
        ValidationBuilder::field(EMAIL_FIELD).required().email().build(),
        ValidationBuilder::field(PASSWORD_FIELD).required().min(5).build(),
    ])
}

/// What a field's status indicator shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid(String),
}

impl FieldStatus {
    fn from_error(error: Option<&String>) -> Self {
        match error {
            Some(message) => Self::Invalid(message.clone()),
            None => Self::Valid,
        }
    }

    /// Tooltip text: the error message, or a reassurance when valid.
    pub fn title(&self) -> &str {
        match self {
            Self::Valid => "All good!",
            Self::Invalid(message) => message,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Snapshot of everything the login page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub is_loading: bool,
    pub email: String,
    pub password: String,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub main_error: Option<String>,
}

/// Headless login form.
#[derive(Debug)]
pub struct LoginForm<V> {
    validation: V,
    state: LoginState,
}

impl<V: Validation> LoginForm<V> {
    /// Creates an empty form and validates it once, so required fields
    /// start out flagged.
    pub fn new(validation: V) -> Self {
        let mut form = Self {
            validation,
            state: LoginState::default(),
        };
        form.revalidate();
        form
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.email = email.into();
        self.revalidate();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.state.password = password.into();
        self.revalidate();
    }

    /// Status of `field`; unknown fields are reported valid.
    pub fn field_status(&self, field: &str) -> FieldStatus {
        match field {
            EMAIL_FIELD => FieldStatus::from_error(self.state.email_error.as_ref()),
            PASSWORD_FIELD => FieldStatus::from_error(self.state.password_error.as_ref()),
            _ => FieldStatus::Valid,
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading && !self.has_field_errors()
    }

    fn has_field_errors(&self) -> bool {
        self.state.email_error.is_some() || self.state.password_error.is_some()
    }

    fn revalidate(&mut self) {
        let values = FieldValues::new()
            .with(EMAIL_FIELD, self.state.email.as_str())
            .with(PASSWORD_FIELD, self.state.password.as_str());
        self.state.email_error = self.validation.validate(EMAIL_FIELD, &values);
        self.state.password_error = self.validation.validate(PASSWORD_FIELD, &values);
    }

    /// Submits the credentials.
    ///
    /// Does nothing and returns [`SubmitError::Busy`] or
    /// [`SubmitError::Invalid`] when the form cannot be submitted. On
    /// success the token is saved and the form stays in the loading state
    /// until the caller navigates away, so a repeated submit is rejected.
    /// On failure the loading flag is cleared and the error message becomes
    /// the form's main error.
    pub fn submit<A, S>(&mut self, auth: &A, tokens: &S) -> Result<(), SubmitError>
    where
        A: Authentication + ?Sized,
        S: AccessTokenStore + ?Sized,
    {
        if self.state.is_loading {
            tracing::debug!("login submit ignored: already in progress");
            return Err(SubmitError::Busy);
        }
        if self.has_field_errors() {
            tracing::debug!("login submit ignored: form has invalid fields");
            return Err(SubmitError::Invalid);
        }

        self.state.is_loading = true;
        self.state.main_error = None;
        tracing::debug!("submitting login");

        let params = AuthenticationParams {
            email: self.state.email.clone(),
            password: self.state.password.clone(),
        };
        let outcome = auth
            .auth(&params)
            .and_then(|account| tokens.save(&account.access_token));

        match outcome {
            Ok(()) => {
                tracing::debug!("login succeeded");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(code = err.code(), "login failed");
                self.state.is_loading = false;
                self.state.main_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
