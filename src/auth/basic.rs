//! Parsing of `Authorization: Basic ...` header values.

use base64::{engine::general_purpose::STANDARD, Engine};

use super::AuthError;

/// Username and password carried by a basic auth header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parse a header value of the form `Basic base64(username:password)`.
    ///
    /// The scheme is case-insensitive. The password may contain `:`.
    pub fn parse(header: &str) -> Result<Self, AuthError> {
        let (scheme, encoded) = header
            .trim()
            .split_once(' ')
            .ok_or(AuthError::Malformed("missing scheme"))?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::Malformed("unsupported scheme"));
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::Malformed("invalid base64"))?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::Malformed("invalid utf-8"))?;
        let (username, password) = decoded
            .split_once(':')
            .ok_or(AuthError::Malformed("missing ':' separator"))?;

        Ok(Self::new(username, password))
    }

    /// Render as a header value, the inverse of [`parse`](Self::parse).
    pub fn header_value(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
