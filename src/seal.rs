// src/seal.rs
//! Encrypt-then-MAC composition
//!
//! `seal` encrypts first, then tags ciphertext ++ IV; `open` verifies the
//! tag in constant time BEFORE any decryption, so tampered input is
//! rejected without ever feeding it to the cipher.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::buffer::ByteBuf;
use crate::cipher::{Aes256CtrCipher, Cipher};
use crate::consts::{ENC_KEY_INFO, KEY_LEN, MAC_KEY_INFO};
use crate::container::SealedContainer;
use crate::error::{CoreError, Result};
use crate::mac::{tags_equal, Authenticator, HmacSha256};

/// Orchestrates a [`Cipher`] and an [`Authenticator`] into
/// seal/open. Holds no per-call mutable state; safe to share across
/// threads once constructed.
pub struct AuthenticatedEncryptor {
    enc_key: Zeroizing<Vec<u8>>,
    mac_key: Zeroizing<Vec<u8>>,
    cipher: Box<dyn Cipher>,
    mac: Box<dyn Authenticator>,
}

impl std::fmt::Debug for AuthenticatedEncryptor {
    /// Key material and primitives are redacted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedEncryptor").finish_non_exhaustive()
    }
}

impl AuthenticatedEncryptor {
    /// Derives independent cipher and MAC subkeys from `master` via
    /// HKDF-SHA256 with distinct info labels.
    ///
    /// Fails with [`CoreError::KeyTooShort`] if `master` is shorter than
    /// the cipher's required key size.
    pub fn new(master: &[u8]) -> Result<Self> {
        Self::with_capabilities(master, Box::new(Aes256CtrCipher), Box::new(HmacSha256))
    }

    /// Same derivation as [`new`](Self::new) but with injected primitives.
    pub fn with_capabilities(
        master: &[u8],
        cipher: Box<dyn Cipher>,
        mac: Box<dyn Authenticator>,
    ) -> Result<Self> {
        check_master(master, cipher.as_ref())?;

        let hk = Hkdf::<Sha256>::new(None, master);
        let mut enc_key = Zeroizing::new(vec![0u8; cipher.key_len()]);
        let mut mac_key = Zeroizing::new(vec![0u8; KEY_LEN]);
        hk.expand(ENC_KEY_INFO, enc_key.as_mut_slice())
            .map_err(|_| CoreError::Kdf)?;
        hk.expand(MAC_KEY_INFO, mac_key.as_mut_slice())
            .map_err(|_| CoreError::Kdf)?;

        Ok(Self {
            enc_key,
            mac_key,
            cipher,
            mac,
        })
    }

    /// Original single-key scheme: the raw key is handed to both the cipher
    /// and the authenticator, with no separation. Prefer [`new`](Self::new);
    /// this exists to interoperate with containers sealed by peers that
    /// reuse the raw key for both roles.
    pub fn with_shared_key(key: &[u8]) -> Result<Self> {
        let cipher: Box<dyn Cipher> = Box::new(Aes256CtrCipher);
        check_master(key, cipher.as_ref())?;

        Ok(Self {
            enc_key: Zeroizing::new(key.to_vec()),
            mac_key: Zeroizing::new(key.to_vec()),
            cipher,
            mac: Box::new(HmacSha256),
        })
    }

    /// Encrypt `plaintext` and tag the result.
    ///
    /// The tag covers ciphertext ++ IV — never the plaintext — so a
    /// verifier can reject tampered input without decrypting anything.
    pub fn seal(&self, plaintext: &[u8]) -> Result<SealedContainer> {
        let (ciphertext, iv) = self.cipher.encrypt(self.enc_key.as_slice(), plaintext)?;
        let tag = self
            .mac
            .tag(self.mac_key.as_slice(), &mac_input(&ciphertext, &iv))?;
        Ok(SealedContainer::new(ciphertext, iv, tag))
    }

    /// Verify the container's tag, then decrypt.
    ///
    /// Tag mismatch returns [`CoreError::Tampered`] without any decryption
    /// — no decryption oracle, no partial plaintext.
    pub fn open(&self, container: &SealedContainer) -> Result<ByteBuf> {
        let expected = self.mac.tag(
            self.mac_key.as_slice(),
            &mac_input(&container.ciphertext, &container.iv),
        )?;
        if !tags_equal(expected.as_slice(), container.tag.as_slice()) {
            tracing::debug!("authentication tag mismatch, refusing to decrypt");
            return Err(CoreError::Tampered);
        }
        self.cipher.decrypt(
            self.enc_key.as_slice(),
            container.iv.as_slice(),
            container.ciphertext.as_slice(),
        )
    }

    /// Raw-triple entry point for callers that deserialize containers by
    /// hand. The field-count check happens here, before any crypto.
    pub fn open_parts(&self, parts: Vec<ByteBuf>) -> Result<ByteBuf> {
        let container = SealedContainer::from_parts(parts)?;
        self.open(&container)
    }
}

fn check_master(master: &[u8], cipher: &dyn Cipher) -> Result<()> {
    if master.len() < cipher.key_len() {
        return Err(CoreError::KeyTooShort {
            need: cipher.key_len(),
            got: master.len(),
        });
    }
    Ok(())
}

/// Tag input is ciphertext ++ IV, in that fixed order on both sides
fn mac_input(ciphertext: &ByteBuf, iv: &ByteBuf) -> Vec<u8> {
    let mut message = Vec::with_capacity(ciphertext.len() + iv.len());
    message.extend_from_slice(ciphertext.as_slice());
    message.extend_from_slice(iv.as_slice());
    message
}
