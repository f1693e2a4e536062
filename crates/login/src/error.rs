/// Failure reported by an [`Authentication`](crate::Authentication) or
/// [`AccessTokenStore`](crate::AccessTokenStore) collaborator.
///
/// The `Display` text is what the form shows as its main error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server rejected the email/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Anything else went wrong.
    #[error("Something went wrong. Please try again soon.")]
    Unexpected,
}

impl AuthError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            Self::Unexpected => "AUTH_UNEXPECTED",
        }
    }
}

/// Why [`LoginForm::submit`](crate::LoginForm::submit) did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A submission is already in flight or has already succeeded.
    #[error("a login attempt is already in progress")]
    Busy,

    /// At least one field has a validation error.
    #[error("the form has invalid fields")]
    Invalid,

    /// The collaborators failed; the message is also stored as the main error.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl SubmitError {
    /// Whether the authenticator was called during this submission.
    #[must_use]
    pub fn reached_authenticator(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
