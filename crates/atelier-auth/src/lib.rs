//! Authentication for the Atelier storefront.
//!
//! Accounts live in local storage next to the cart and reviews. There is
//! no server; this is a stub that still hashes passwords properly.

mod error;
mod form;
mod password;
mod service;
mod session;
mod user;

pub use error::AuthError;
pub use form::{is_valid_email, LoginForm, SignupForm, MIN_PASSWORD_CHARS};
pub use password::PasswordHasher;
pub use service::{AuthService, ACCOUNTS_KEY};
pub use session::{AuthSession, SessionId, SESSION_KEY};
pub use user::{Account, User};
