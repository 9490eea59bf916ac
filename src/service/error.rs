//! Error types for cookbook request handling.

use serde_json::{json, Value};
use thiserror::Error;

use crate::auth::{AuthError, WRONG_CREDENTIALS};
use crate::recipe::ValidationError;
use crate::store::StoreError;

/// Terminal failure of a single request.
#[derive(Debug, Error)]
pub enum CookbookError {
    /// No recipe matched the id or filter.
    #[error("not found: {0}")]
    NotFound(String),
    /// A required field was missing on create.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Missing or invalid credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] AuthError),
    /// The request body could not be decoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),
    /// Store failure.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for CookbookError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => CookbookError::NotFound(format!("recipe {id}")),
            other => CookbookError::Store(other),
        }
    }
}

impl CookbookError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CookbookError::NotFound(_) => 404,
            CookbookError::Validation(_) => 400,
            CookbookError::Unauthorized(_) => 403,
            CookbookError::InvalidBody(_) => 400,
            CookbookError::Store(_) => 500,
        }
    }

    /// JSON body sent back to the client.
    ///
    /// Validation errors are keyed by field; credential failures all share
    /// one message so the response does not reveal which part was wrong.
    pub fn body(&self) -> Value {
        match self {
            CookbookError::Validation(e) => json!({ "message": { e.field: e.message } }),
            CookbookError::Unauthorized(_) => json!({ "message": WRONG_CREDENTIALS }),
            CookbookError::Store(_) => json!({ "message": "internal store error" }),
            other => json!({ "message": other.to_string() }),
        }
    }
}
