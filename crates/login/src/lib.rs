//! # loginkit-login
//!
//! The logic of a login page without the page: field values, per-field
//! validation messages, a loading flag, a main error, and a submit step
//! that talks to an [`Authentication`] and an [`AccessTokenStore`].
//!
//! ```
//! use loginkit_login::{LoginForm, make_login_validation};
//!
//! let mut form = LoginForm::new(make_login_validation());
//! assert!(!form.can_submit());
//!
//! form.set_email("someone@example.com");
//! form.set_password("hunter22");
//! assert!(form.can_submit());
//! ```

mod auth;
mod error;
mod form;

pub use auth::{AccessTokenStore, AccountModel, Authentication, AuthenticationParams};
pub use error::{AuthError, SubmitError};
pub use form::{
    EMAIL_FIELD, FieldStatus, LoginForm, LoginState, PASSWORD_FIELD, make_login_validation,
};
