//! The persisted sign-in session.

use atelier_cache::Cache;
use atelier_commerce::ids::generate_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::AuthError;

/// Storage key for the current session.
pub const SESSION_KEY: &str = "session";

/// Session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new random session ID.
    pub fn generate() -> Self {
        Self(generate_id("sess"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The signed-in user, as remembered between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub id: SessionId,
    pub user: User,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Start a session for a user.
    pub fn new(user: User) -> Self {
        Self {
            id: SessionId::generate(),
            user,
            created_at: Utc::now(),
        }
    }

    /// Load the stored session, if any.
    pub fn load(cache: &Cache) -> Result<Option<Self>, AuthError> {
        Ok(cache.get(SESSION_KEY)?)
    }

    pub fn save(&self, cache: &Cache) -> Result<(), AuthError> {
        cache.set(SESSION_KEY, self)?;
        Ok(())
    }

    /// Forget the stored session.
    pub fn clear(cache: &Cache) -> Result<(), AuthError> {
        cache.delete(SESSION_KEY)?;
        Ok(())
    }
}
