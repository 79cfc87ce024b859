// src/config.rs
//! Token store options — explicit struct, no process-wide defaults
//!
//! Every recognized option is enumerated here. Construct directly, or
//! parse from TOML text the caller fetched itself; there is no hidden
//! global and no lazy file load.

use serde::Deserialize;

use crate::consts::MAX_TOKEN_LEN;
use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenOptions {
    /// Signing secret. Required, must be non-empty.
    pub secret: String,

    /// Cookie domain, passed through to clear instructions.
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default = "default_path")]
    pub path: String,

    /// Secure (HTTPS-only) transport flag.
    #[serde(default)]
    pub secure: bool,

    /// Suggested token lifetime in seconds. Advisory for the transport;
    /// verification reports age and lets the caller decide freshness.
    #[serde(default = "default_expiry_secs")]
    pub expiry_secs: u64,

    /// Ceiling for one serialized token, separators included.
    #[serde(default = "default_max_token_len")]
    pub max_token_len: usize,
}

impl TokenOptions {
    /// Options with the given secret and defaults for everything else.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            domain: None,
            path: default_path(),
            secure: false,
            expiry_secs: default_expiry_secs(),
            max_token_len: default_max_token_len(),
        }
    }

    /// Parse options from TOML text. No file I/O here — callers own where
    /// the text comes from.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

fn default_path() -> String {
    "/".to_string()
}

fn default_expiry_secs() -> u64 {
    // Two weeks — the common session-cookie horizon
    14 * 24 * 3600
}

fn default_max_token_len() -> usize {
    MAX_TOKEN_LEN
}
