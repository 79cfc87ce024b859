// src/buffer.rs
//! Immutable byte value — the common currency of ciphertexts, IVs and tags

use std::fmt;

/// A fixed-content byte sequence with value semantics. Copies are
/// independent; equality is exact byte comparison.
///
/// Equality here is NOT constant time — authentication tags must be
/// compared with [`crate::mac::tags_equal`] instead.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ByteBuf(Vec<u8>);

impl ByteBuf {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ByteBuf {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteBuf {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ByteBuf {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ByteBuf {
    /// Truncated hex fingerprint — never the full contents
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.0.len().min(8);
        write!(
            f,
            "ByteBuf({} bytes, {}{})",
            self.0.len(),
            hex::encode(&self.0[..shown]),
            if self.0.len() > shown { ".." } else { "" },
        )
    }
}
