//! Basic authentication against a fixed username/password map.

mod basic;

pub use basic::BasicAuth;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Body message sent for every rejected request.
pub const WRONG_CREDENTIALS: &str = "Wrong username or password";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingHeader,
    #[error("malformed authorization header: {0}")]
    Malformed(&'static str),
    #[error("wrong credentials for user {0}")]
    WrongCredentials(String),
}

/// Accepted username/password pairs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials {
    users: HashMap<String, String>,
}

impl Default for Credentials {
    /// The two demo accounts.
    fn default() -> Self {
        Self::empty().with_user("gregory", "boleslavsky").with_user("test", "pw")
    }
}

impl Credentials {
    /// No accounts; every request is rejected.
    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    pub fn from_map(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(username.into(), password.into());
        self
    }

    pub fn password(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(|p| p.as_str())
    }

    /// Compare the password in constant time. An unknown user is compared
    /// against an empty password and always fails.
    pub fn verify(&self, auth: &BasicAuth) -> bool {
        let stored = self.password(&auth.username);
        let known = stored.is_some();
        let matches = auth
            .password
            .as_bytes()
            .ct_eq(stored.unwrap_or("").as_bytes());
        bool::from(matches) & known
    }

    /// Check an `Authorization` header value. Returns the authenticated username.
    pub fn authenticate(&self, header: Option<&str>) -> Result<String, AuthError> {
        let auth = BasicAuth::parse(header.ok_or(AuthError::MissingHeader)?)?;
        if self.verify(&auth) {
            Ok(auth.username)
        } else {
            Err(AuthError::WrongCredentials(auth.username))
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut users: Vec<&str> = self.users.keys().map(|u| u.as_str()).collect();
        users.sort_unstable();
        f.debug_struct("Credentials").field("users", &users).finish()
    }
}
