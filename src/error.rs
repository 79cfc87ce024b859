// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Key material shorter than the cipher requires. Construction-time only.
    #[error("key too short: need at least {need} bytes, got {got}")]
    KeyTooShort { need: usize, got: usize },

    /// Signing secret missing or empty. Construction-time only.
    #[error("signing secret must not be empty")]
    EmptySecret,

    /// Container or transport string has the wrong shape. Security-wise the
    /// same as tampering; kept distinct so diagnostics can tell them apart.
    #[error("malformed sealed input")]
    Malformed,

    /// Authentication tag mismatch. An expected outcome in adversarial
    /// environments — callers treat the data as not authenticated.
    #[error("authentication tag mismatch")]
    Tampered,

    /// Serialized signed token would exceed the transport ceiling.
    #[error("signed token too large: {len} bytes exceeds limit of {max}")]
    TokenTooLarge { len: usize, max: usize },

    /// IV of the wrong length handed to the cipher.
    #[error("invalid iv: expected {expected} bytes")]
    InvalidIv { expected: usize },

    /// Authenticator could not be keyed with the given secret.
    #[error("mac keying failed")]
    Mac,

    /// Subkey derivation failed (HKDF expand).
    #[error("subkey derivation failed")]
    Kdf,

    /// Base64 decode failure in the text-encoding adapter.
    #[error("text decode failed: {0}")]
    Decode(#[from] base64::DecodeError),

    /// TOML options parse failure.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}
