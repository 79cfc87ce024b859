// src/mac.rs
//! Keyed authentication tags and constant-time comparison

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::buffer::ByteBuf;
use crate::error::{CoreError, Result};

/// Keyed-tag capability: the same secret + message always yields the same
/// tag; to a party without the secret a tag is indistinguishable from
/// random. Injected into [`crate::seal::AuthenticatedEncryptor`] and
/// [`crate::token::SignedTokenStore`] so tests can swap in a fake.
pub trait Authenticator: Send + Sync {
    fn tag(&self, secret: &[u8], message: &[u8]) -> Result<ByteBuf>;
}

/// Default authenticator — HMAC-SHA256
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256;

impl Authenticator for HmacSha256 {
    fn tag(&self, secret: &[u8], message: &[u8]) -> Result<ByteBuf> {
        if secret.is_empty() {
            return Err(CoreError::EmptySecret);
        }
        let mut mac = Hmac::<Sha256>::new_from_slice(secret).map_err(|_| CoreError::Mac)?;
        mac.update(message);
        Ok(ByteBuf::from(mac.finalize().into_bytes().to_vec()))
    }
}

/// Constant-time tag equality: runtime does not depend on where the first
/// mismatching byte sits, so an attacker cannot guess a tag byte-by-byte
/// through timing. Differing lengths compare unequal (length is public).
pub fn tags_equal(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
