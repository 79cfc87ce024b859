// src/cipher.rs
//! Counter-mode block cipher capability
//!
//! Plain decryption here carries NO integrity — CTR output is malleable.
//! Callers go through `AuthenticatedEncryptor`, which verifies the tag
//! before this module ever sees attacker-controlled ciphertext.

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::Aes256;
use rand::RngCore;

use crate::buffer::ByteBuf;
use crate::consts::{IV_LEN, KEY_LEN};
use crate::error::{CoreError, Result};

type Ctr = ctr::Ctr128BE<Aes256>;

/// Encrypt/decrypt capability. Implementations generate the IV internally
/// and unpredictably for every encrypt call — never caller-supplied, never
/// reused under the same key.
pub trait Cipher: Send + Sync {
    fn key_len(&self) -> usize;
    fn iv_len(&self) -> usize;

    /// Encrypt under `key` with a fresh random IV. Returns (ciphertext, iv).
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<(ByteBuf, ByteBuf)>;

    /// Decrypt. Wrong key or corrupted input yields garbage of the expected
    /// length, not an error — output is untrusted until authenticated.
    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<ByteBuf>;
}

/// AES-256 in counter mode with a 16-byte random IV per call
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256CtrCipher;

impl Aes256CtrCipher {
    fn keystream(key: &[u8], iv: &[u8], data: &mut [u8]) -> Result<()> {
        let mut ctr = Ctr::new_from_slices(&key[..KEY_LEN], iv)
            .map_err(|_| CoreError::InvalidIv { expected: IV_LEN })?;
        ctr.apply_keystream(data);
        Ok(())
    }
}

impl Cipher for Aes256CtrCipher {
    fn key_len(&self) -> usize {
        KEY_LEN
    }

    fn iv_len(&self) -> usize {
        IV_LEN
    }

    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<(ByteBuf, ByteBuf)> {
        check_key(key)?;
        let mut iv = vec![0u8; IV_LEN];
        rand::rng().fill_bytes(&mut iv);

        let mut buf = plaintext.to_vec();
        Self::keystream(key, &iv, &mut buf)?;
        Ok((ByteBuf::from(buf), ByteBuf::from(iv)))
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<ByteBuf> {
        check_key(key)?;
        if iv.len() != IV_LEN {
            return Err(CoreError::InvalidIv { expected: IV_LEN });
        }
        // CTR decryption is the same keystream application
        let mut buf = ciphertext.to_vec();
        Self::keystream(key, iv, &mut buf)?;
        Ok(ByteBuf::from(buf))
    }
}

fn check_key(key: &[u8]) -> Result<()> {
    if key.len() < KEY_LEN {
        return Err(CoreError::KeyTooShort {
            need: KEY_LEN,
            got: key.len(),
        });
    }
    Ok(())
}
