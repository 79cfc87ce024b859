// src/lib.rs
//! sealed-token — tamper-evident storage of opaque strings in client-held tokens
//!
//! Features:
//! - Encrypt-then-MAC sealing (AES-256-CTR + HMAC-SHA256)
//! - Signed `signature|timestamp|value` tokens with age reporting
//! - Constant-time tag comparison throughout
//! - HKDF-SHA256 subkey separation by default

pub mod buffer;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod container;
pub mod encoding;
pub mod key_ops;
pub mod mac;
pub mod seal;
pub mod token;

pub mod error;

// Re-export everything users need at the crate root
pub use buffer::ByteBuf;
pub use cipher::{Aes256CtrCipher, Cipher};
pub use config::TokenOptions;
pub use container::SealedContainer;
pub use encoding::{Base64Encoding, TextEncoding};
pub use error::{CoreError, Result};
pub use key_ops::{generate_key, secret_representations, SecretRepr};
pub use mac::{tags_equal, Authenticator, HmacSha256};
pub use seal::AuthenticatedEncryptor;
pub use token::{
    unix_now, ClearInstruction, SignedTokenStore, Verification, VerificationCache,
};
