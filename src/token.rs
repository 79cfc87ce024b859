// src/token.rs
//! Signed `signature|timestamp|value` tokens
//!
//! No encryption here — the value rides in the clear. The HMAC binds
//! name + timestamp + value, so the client can hold the token and the
//! server can later prove it was not altered and learn its age.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use chrono::Utc;
use zeroize::Zeroizing;

use crate::config::TokenOptions;
use crate::consts::{FIELD_SEPARATOR, TOKEN_FIELDS};
use crate::error::{CoreError, Result};
use crate::mac::{tags_equal, Authenticator, HmacSha256};

/// Outcome of verifying a client-presented token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Signature checks out. `age` is `now - signed_at` in seconds; signed
    /// (not unsigned) so clock skew cannot underflow.
    Valid { value: String, age: i64 },
    /// Nothing was presented under this name — the "never stored" case.
    /// Callers branch on this to decide "no session" vs "attack".
    Absent,
    /// Signature mismatch or broken shape.
    Tampered,
}

/// Caller-owned memo of verification outcomes, scoped to one request.
/// Single-threaded use only; create one per request and drop it after.
pub type VerificationCache = HashMap<String, Verification>;

/// Advisory instruction for the transport layer to discard a client-held
/// token. Purely a transport signal — no server-side effect on keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearInstruction {
    pub name: String,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
}

/// Signs and verifies `signature|base36(timestamp)|value` tokens under a
/// long-lived secret. Constructed once, reused across calls; holds no
/// per-call mutable state.
pub struct SignedTokenStore {
    secret: Zeroizing<Vec<u8>>,
    signer: Box<dyn Authenticator>,
    path: String,
    domain: Option<String>,
    secure: bool,
    max_len: usize,
}

impl std::fmt::Debug for SignedTokenStore {
    /// Secret and signer are redacted — only transport attributes shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedTokenStore")
            .field("path", &self.path)
            .field("domain", &self.domain)
            .field("secure", &self.secure)
            .field("max_len", &self.max_len)
            .finish_non_exhaustive()
    }
}

impl SignedTokenStore {
    /// HMAC-SHA256 signer. Fails with [`CoreError::EmptySecret`] if the
    /// options carry no secret.
    pub fn new(options: &TokenOptions) -> Result<Self> {
        Self::with_signer(options, Box::new(HmacSha256))
    }

    /// Swap in a different keyed-tag capability (e.g. a deterministic fake
    /// in tests).
    pub fn with_signer(options: &TokenOptions, signer: Box<dyn Authenticator>) -> Result<Self> {
        if options.secret.is_empty() {
            return Err(CoreError::EmptySecret);
        }
        Ok(Self {
            secret: Zeroizing::new(options.secret.clone().into_bytes()),
            signer,
            path: options.path.clone(),
            domain: options.domain.clone(),
            secure: options.secure,
            max_len: options.max_token_len,
        })
    }

    /// Sign `value` for `name` at time `now` (unix seconds).
    ///
    /// Output is `signature|base36(now)|value`. Fails with
    /// [`CoreError::TokenTooLarge`] when name + signature + time part +
    /// value + separators would exceed the configured ceiling — the
    /// transport would truncate silently, which reads as tampering later.
    pub fn sign(&self, name: &str, value: &str, now: u64) -> Result<String> {
        let time_part = encode_base36(now);
        let sig = self.signature(name, &time_part, value)?;

        let sep = FIELD_SEPARATOR;
        let len = name.len() + sig.len() + time_part.len() + value.len() + 2;
        if len > self.max_len {
            return Err(CoreError::TokenTooLarge {
                len,
                max: self.max_len,
            });
        }
        Ok(format!("{sig}{sep}{time_part}{sep}{value}"))
    }

    /// [`sign`](Self::sign) at the current system time.
    pub fn sign_now(&self, name: &str, value: &str) -> Result<String> {
        self.sign(name, value, unix_now())
    }

    /// Verify a client-presented token. `raw` is `None` when the transport
    /// had nothing stored under `name` — that is [`Verification::Absent`],
    /// deliberately distinct from tampering.
    ///
    /// The value field is the remainder after the second separator, so
    /// values may themselves contain `|`.
    pub fn verify(&self, name: &str, raw: Option<&str>, now: u64) -> Verification {
        let Some(raw) = raw else {
            return Verification::Absent;
        };

        let fields: Vec<&str> = raw.splitn(TOKEN_FIELDS, FIELD_SEPARATOR).collect();
        let &[sig, time_part, value] = fields.as_slice() else {
            tracing::debug!(name, "signed token with wrong field count");
            return Verification::Tampered;
        };

        // Recompute over the verbatim time part — no re-encoding
        let expected = match self.signature(name, time_part, value) {
            Ok(s) => s,
            Err(_) => return Verification::Tampered,
        };
        if !tags_equal(expected.as_bytes(), sig.as_bytes()) {
            tracing::debug!(name, "signed token signature mismatch");
            return Verification::Tampered;
        }

        let Some(signed_at) = decode_base36(time_part) else {
            return Verification::Tampered;
        };
        Verification::Valid {
            value: value.to_string(),
            age: now as i64 - signed_at as i64,
        }
    }

    /// Memoized verify: a second read of the same name within one request
    /// reuses the cached outcome instead of redoing the HMAC.
    pub fn verify_cached(
        &self,
        cache: &mut VerificationCache,
        name: &str,
        raw: Option<&str>,
        now: u64,
    ) -> Verification {
        if let Some(hit) = cache.get(name) {
            return hit.clone();
        }
        let outcome = self.verify(name, raw, now);
        cache.insert(name.to_string(), outcome.clone());
        outcome
    }

    /// Tell the transport to clear the client-held token for `name`.
    pub fn invalidate(&self, name: &str) -> ClearInstruction {
        ClearInstruction {
            name: name.to_string(),
            path: self.path.clone(),
            domain: self.domain.clone(),
            secure: self.secure,
        }
    }

    /// `base64(HMAC(secret, name ++ time_part ++ value))`, padding stripped
    /// for transport compactness. Binding the name prevents replaying a
    /// token under a different name.
    fn signature(&self, name: &str, time_part: &str, value: &str) -> Result<String> {
        let mut message = Vec::with_capacity(name.len() + time_part.len() + value.len());
        message.extend_from_slice(name.as_bytes());
        message.extend_from_slice(time_part.as_bytes());
        message.extend_from_slice(value.as_bytes());

        let tag = self.signer.tag(self.secret.as_slice(), &message)?;
        Ok(STANDARD_NO_PAD.encode(tag.as_slice()))
    }
}

/// Current unix time in whole seconds
pub fn unix_now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn encode_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

fn decode_base36(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    let mut n: u64 = 0;
    for b in text.bytes() {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'z' => b - b'a' + 10,
            _ => return None,
        };
        n = n.checked_mul(36)?.checked_add(u64::from(digit))?;
    }
    Some(n)
}
