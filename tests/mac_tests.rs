// tests/mac_tests.rs
use sealed_token::consts::TAG_LEN;
use sealed_token::error::CoreError;
use sealed_token::mac::{tags_equal, Authenticator, HmacSha256};

#[test]
fn test_tags_are_deterministic_and_keyed() {
    let mac = HmacSha256;

    let a = mac.tag(b"secret", b"message").unwrap();
    let b = mac.tag(b"secret", b"message").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), TAG_LEN);

    let other_message = mac.tag(b"secret", b"message2").unwrap();
    assert_ne!(a, other_message);

    let other_secret = mac.tag(b"secret2", b"message").unwrap();
    assert_ne!(a, other_secret);
}

#[test]
fn test_empty_secret_rejected() {
    let err = HmacSha256.tag(b"", b"message").unwrap_err();
    assert!(matches!(err, CoreError::EmptySecret));
}

#[test]
fn test_tags_equal_full_scan_semantics() {
    // A first-byte mismatch and a last-byte mismatch must both report
    // unequal; the comparison scans the full length either way.
    let base = [0xAAu8; TAG_LEN];

    let mut first = base;
    first[0] ^= 0x01;
    assert!(!tags_equal(&base, &first));

    let mut last = base;
    last[TAG_LEN - 1] ^= 0x01;
    assert!(!tags_equal(&base, &last));

    assert!(tags_equal(&base, &base));
    assert!(tags_equal(b"", b""));

    // Length is public — differing lengths are simply unequal
    assert!(!tags_equal(&base, &base[..TAG_LEN - 1]));
}
