// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Secure key generation plus the string representations (hex, base64)
//! operators need when moving a key between systems.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::consts::KEY_LEN;

/// Generate a new random 256-bit master key
#[inline]
pub fn generate_key() -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(vec![0u8; KEY_LEN]);
    rand::rng().fill_bytes(key.as_mut_slice());
    key
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct SecretRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn secret_representations(key: &[u8]) -> SecretRepr {
    SecretRepr {
        hex: hex::encode(key),
        base64: STANDARD.encode(key),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key),
    }
}
