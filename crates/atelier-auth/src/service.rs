//! Signup, login and logout against locally stored accounts.

use atelier_cache::Cache;
use atelier_commerce::ids::UserId;
use chrono::Utc;

use crate::form::{LoginForm, SignupForm};
use crate::password::PasswordHasher;
use crate::session::AuthSession;
use crate::user::{Account, User};
use crate::AuthError;

/// Storage key for the account list.
pub const ACCOUNTS_KEY: &str = "accounts";

/// Account operations over a local store.
#[derive(Debug)]
pub struct AuthService<'a> {
    cache: &'a Cache,
    hasher: PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(cache: &'a Cache) -> Self {
        Self {
            cache,
            hasher: PasswordHasher::new(),
        }
    }

    fn accounts(&self) -> Result<Vec<Account>, AuthError> {
        Ok(self.cache.get_or_default(ACCOUNTS_KEY)?)
    }

    fn start_session(&self, account: &Account) -> Result<User, AuthError> {
        let user = account.to_user();
        AuthSession::new(user.clone()).save(self.cache)?;
        Ok(user)
    }

    /// Create an account and sign in as it.
    pub fn signup(&self, form: &SignupForm) -> Result<User, AuthError> {
        form.validate()?;

        let mut accounts = self.accounts()?;
        if accounts.iter().any(|a| a.has_email(&form.email)) {
            tracing::info!("signup rejected, email already registered");
            return Err(AuthError::EmailTaken);
        }

        let account = Account {
            id: UserId::generate(),
            email: form.email.trim().to_string(),
            name: form.name.trim().to_string(),
            password_hash: self.hasher.hash(&form.password)?,
            created_at: Utc::now(),
        };
        accounts.push(account.clone());
        self.cache.set(ACCOUNTS_KEY, &accounts)?;

        tracing::info!(user = %account.id, "account created");
        self.start_session(&account)
    }

    /// Sign in with existing credentials.
    pub fn login(&self, form: &LoginForm) -> Result<User, AuthError> {
        form.validate()?;

        let accounts = self.accounts()?;
        let account = accounts
            .iter()
            .find(|a| a.has_email(&form.email))
            .filter(|a| self.hasher.verify(&form.password, &a.password_hash))
            .ok_or_else(|| {
                tracing::info!("login rejected");
                AuthError::InvalidCredentials
            })?;

        tracing::info!(user = %account.id, "signed in");
        self.start_session(account)
    }

    /// Sign out. Signing out while signed out is a no-op.
    pub fn logout(&self) -> Result<(), AuthError> {
        AuthSession::clear(self.cache)?;
        tracing::info!("signed out");
        Ok(())
    }

    /// The signed-in user, or anonymous.
    pub fn current_user(&self) -> Result<User, AuthError> {
        Ok(AuthSession::load(self.cache)?
            .map(|session| session.user)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_form(email: &str) -> SignupForm {
        SignupForm {
            name: "Ada Lovelace".into(),
            email: email.into(),
            password: "engine1".into(),
            confirm_password: "engine1".into(),
        }
    }

    #[test]
    fn test_signup_signs_in() {
        let cache = Cache::in_memory();
        let auth = AuthService::new(&cache);
        assert_eq!(auth.current_user().unwrap(), User::Anonymous);

        let user = auth.signup(&signup_form("ada@example.com")).unwrap();
        assert_eq!(auth.current_user().unwrap(), user);
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_password_is_not_stored_in_clear() {
        let cache = Cache::in_memory();
        AuthService::new(&cache)
            .signup(&signup_form("ada@example.com"))
            .unwrap();

        let raw: serde_json::Value = cache.get(ACCOUNTS_KEY).unwrap().unwrap();
        let raw = raw.to_string();
        assert!(!raw.contains("engine1"));
        assert!(raw.contains("$argon2id$"));
    }

    #[test]
    fn test_duplicate_email_ignores_case() {
        let cache = Cache::in_memory();
        let auth = AuthService::new(&cache);
        auth.signup(&signup_form("ada@example.com")).unwrap();

        let err = auth.signup(&signup_form("ADA@example.com")).unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(err.to_string(), "An account with this email already exists");
    }

    #[test]
    fn test_login_and_logout() {
        let cache = Cache::in_memory();
        let auth = AuthService::new(&cache);
        auth.signup(&signup_form("ada@example.com")).unwrap();
        auth.logout().unwrap();
        assert!(!auth.current_user().unwrap().is_authenticated());

        let user = auth
            .login(&LoginForm::new("Ada@Example.com", "engine1"))
            .unwrap();
        assert_eq!(user.email(), Some("ada@example.com"));
        assert!(auth.current_user().unwrap().is_authenticated());
    }

    #[test]
    fn test_login_failures_share_a_message() {
        let cache = Cache::in_memory();
        let auth = AuthService::new(&cache);
        auth.signup(&signup_form("ada@example.com")).unwrap();
        auth.logout().unwrap();

        let wrong_password = auth
            .login(&LoginForm::new("ada@example.com", "engine2"))
            .unwrap_err();
        let unknown = auth
            .login(&LoginForm::new("grace@example.com", "engine1"))
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), "Invalid email or password");
        assert_eq!(unknown.to_string(), "Invalid email or password");
        assert!(!auth.current_user().unwrap().is_authenticated());
    }

    #[test]
    fn test_invalid_form_touches_nothing() {
        let cache = Cache::in_memory();
        let auth = AuthService::new(&cache);
        let mut form = signup_form("not-an-email");
        form.confirm_password = "different".into();

        let err = auth.signup(&form).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
        assert!(!cache.exists(ACCOUNTS_KEY).unwrap());
    }
}
