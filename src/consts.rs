// src/consts.rs
//! Shared constants — security parameters and transport limits

/// AES-256 key size in bytes
pub const KEY_LEN: usize = 32;

/// AES-CTR IV size in bytes (one cipher block)
pub const IV_LEN: usize = 16;

/// HMAC-SHA256 tag size in bytes
pub const TAG_LEN: usize = 32;

/// Field count of a sealed container: ciphertext, iv, tag — in that order
pub const SEALED_FIELDS: usize = 3;

/// Field count of a signed token: signature, timestamp, value
pub const TOKEN_FIELDS: usize = 3;

/// Separator between encoded fields in transport strings
pub const FIELD_SEPARATOR: char = '|';

/// Ceiling for one serialized signed token (name + signature + time part
/// + value + separators). Cookie headers have practical size limits, and
/// silent truncation by the transport is indistinguishable from tampering.
pub const MAX_TOKEN_LEN: usize = 3896;

/// HKDF info label for the cipher subkey
pub const ENC_KEY_INFO: &[u8] = b"sealed-token:enc";

/// HKDF info label for the MAC subkey
pub const MAC_KEY_INFO: &[u8] = b"sealed-token:mac";
