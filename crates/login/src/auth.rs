//! Collaborators the login form talks to on submit.
//!
//! Transport and token storage live outside this crate; implement these
//! traits over whatever HTTP client and storage the application uses.

use crate::error::AuthError;

/// Credentials sent to the authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationParams {
    pub email: String,
    pub password: String,
}

/// Account returned by a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountModel {
    pub access_token: String,
}

/// Exchanges credentials for an account.
pub trait Authentication {
    fn auth(&self, params: &AuthenticationParams) -> Result<AccountModel, AuthError>;
}

/// Persists the access token of a freshly authenticated account.
pub trait AccessTokenStore {
    fn save(&self, access_token: &str) -> Result<(), AuthError>;
}

impl<T: Authentication + ?Sized> Authentication for &T {
    fn auth(&self, params: &AuthenticationParams) -> Result<AccountModel, AuthError> {
        (**self).auth(params)
    }
}

impl<T: AccessTokenStore + ?Sized> AccessTokenStore for &T {
    fn save(&self, access_token: &str) -> Result<(), AuthError> {
        (**self).save(access_token)
    }
}
