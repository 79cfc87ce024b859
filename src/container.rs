// src/container.rs
//! The {ciphertext, iv, tag} wire triple

use crate::buffer::ByteBuf;
use crate::consts::SEALED_FIELDS;
use crate::encoding::TextEncoding;
use crate::error::{CoreError, Result};

/// One encrypted message: ciphertext, IV, authentication tag, in that fixed
/// order. The three-field shape is the only structural format contract and
/// must be preserved bit-for-bit across implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedContainer {
    pub ciphertext: ByteBuf,
    pub iv: ByteBuf,
    pub tag: ByteBuf,
}

impl SealedContainer {
    pub fn new(ciphertext: ByteBuf, iv: ByteBuf, tag: ByteBuf) -> Self {
        Self {
            ciphertext,
            iv,
            tag,
        }
    }

    /// Rebuild from an ordered field list. Anything but exactly three
    /// fields is rejected here, before any cryptographic operation runs.
    pub fn from_parts(parts: Vec<ByteBuf>) -> Result<Self> {
        match <[ByteBuf; SEALED_FIELDS]>::try_from(parts) {
            Ok([ciphertext, iv, tag]) => Ok(Self::new(ciphertext, iv, tag)),
            Err(parts) => {
                tracing::debug!(fields = parts.len(), "sealed container with wrong field count");
                Err(CoreError::Malformed)
            }
        }
    }

    /// Fields in wire order
    pub fn parts(&self) -> [&ByteBuf; SEALED_FIELDS] {
        [&self.ciphertext, &self.iv, &self.tag]
    }

    /// Encode for a text-only transport: three encoded fields joined by the
    /// adapter's separator.
    pub fn encode<E: TextEncoding>(&self, encoding: &E) -> String {
        let sep = encoding.separator();
        format!(
            "{}{sep}{}{sep}{}",
            encoding.encode(self.ciphertext.as_slice()),
            encoding.encode(self.iv.as_slice()),
            encoding.encode(self.tag.as_slice()),
        )
    }

    /// Decode a transport string. Wrong field count or undecodable fields
    /// are malformed input — treated like tampering by callers.
    pub fn decode<E: TextEncoding>(text: &str, encoding: &E) -> Result<Self> {
        let fields: Vec<&str> = text.split(encoding.separator()).collect();
        if fields.len() != SEALED_FIELDS {
            tracing::debug!(fields = fields.len(), "sealed transport string with wrong field count");
            return Err(CoreError::Malformed);
        }
        let mut parts = Vec::with_capacity(SEALED_FIELDS);
        for field in fields {
            let bytes = encoding.decode(field).map_err(|_| CoreError::Malformed)?;
            parts.push(ByteBuf::from(bytes));
        }
        Self::from_parts(parts)
    }
}
