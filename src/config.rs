//! Configuration file parsing for the cookbook server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [store] - Whether to preload the demo recipes
//! - [auth.users] - Accepted username/password pairs
//!
//! Every section is optional; missing values fall back to the defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::auth::Credentials;

/// TOML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CookbookConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub auth: AuthSection,
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

/// Store configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
    /// Preload the demo recipes at startup
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

fn default_seed() -> bool {
    true
}

/// Authentication section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSection {
    /// Username -> password. Defaults to the demo accounts when omitted.
    #[serde(default)]
    pub users: Credentials,
}

impl CookbookConfig {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), users = config.auth.users.len(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
