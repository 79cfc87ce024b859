// src/encoding.rs
//! Text-encoding seam for embedding binary fields in text-only transports

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::FIELD_SEPARATOR;
use crate::error::Result;

/// Bytes ↔ printable string, plus the separator used when several encoded
/// fields share one transport string.
pub trait TextEncoding {
    fn encode(&self, bytes: &[u8]) -> String;
    fn decode(&self, text: &str) -> Result<Vec<u8>>;

    /// Must not appear in the encoded alphabet
    fn separator(&self) -> char {
        FIELD_SEPARATOR
    }
}

/// Standard base64 with `=` padding. The alphabet never contains `|`, so
/// encoded fields split cleanly on the default separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Encoding;

impl TextEncoding for Base64Encoding {
    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(text)?)
    }
}
