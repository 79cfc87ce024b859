// tests/seal_tests.rs
use sealed_token::buffer::ByteBuf;
use sealed_token::cipher::{Aes256CtrCipher, Cipher};
use sealed_token::container::SealedContainer;
use sealed_token::error::CoreError;
use sealed_token::key_ops::generate_key;
use sealed_token::seal::AuthenticatedEncryptor;

mod common;

#[test]
fn test_seal_open_roundtrip() {
    common::setup();
    let key = generate_key();
    let enc = AuthenticatedEncryptor::new(&key).unwrap();

    for plaintext in [
        b"".as_slice(),
        b"x".as_slice(),
        b"Attack at dawn!".as_slice(),
        &[0u8; 1024],
    ] {
        let sealed = enc.seal(plaintext).unwrap();
        let opened = enc.open(&sealed).unwrap();
        assert_eq!(opened.as_slice(), plaintext);
    }
}

#[test]
fn test_open_rejects_any_single_bit_flip() {
    let key = generate_key();
    let enc = AuthenticatedEncryptor::new(&key).unwrap();
    let sealed = enc.seal(b"attack at dawn").unwrap();

    let fields = [
        sealed.ciphertext.as_slice().to_vec(),
        sealed.iv.as_slice().to_vec(),
        sealed.tag.as_slice().to_vec(),
    ];

    for (which, field) in fields.iter().enumerate() {
        for i in 0..field.len() {
            for bit in 0..8 {
                let mut mutated = fields.clone();
                mutated[which][i] ^= 1 << bit;
                let tampered = SealedContainer::new(
                    ByteBuf::from(mutated[0].clone()),
                    ByteBuf::from(mutated[1].clone()),
                    ByteBuf::from(mutated[2].clone()),
                );
                assert!(
                    matches!(enc.open(&tampered), Err(CoreError::Tampered)),
                    "field {which}, byte {i}, bit {bit} slipped through"
                );
            }
        }
    }
}

#[test]
fn test_two_seals_never_share_iv_or_ciphertext() {
    let key = generate_key();
    let enc = AuthenticatedEncryptor::new(&key).unwrap();

    let a = enc.seal(b"same plaintext").unwrap();
    let b = enc.seal(b"same plaintext").unwrap();

    assert_ne!(a.iv, b.iv);
    assert_ne!(a.ciphertext, b.ciphertext);
}

#[test]
fn test_short_key_rejected_at_construction() {
    let err = AuthenticatedEncryptor::new(&[0u8; 16]).unwrap_err();
    assert!(matches!(err, CoreError::KeyTooShort { need: 32, got: 16 }));

    let err = AuthenticatedEncryptor::with_shared_key(b"short").unwrap_err();
    assert!(matches!(err, CoreError::KeyTooShort { .. }));
}

#[test]
fn test_shared_key_scheme_roundtrip() {
    let key = generate_key();
    let enc = AuthenticatedEncryptor::with_shared_key(&key).unwrap();

    let sealed = enc.seal(b"legacy peer data").unwrap();
    assert_eq!(enc.open(&sealed).unwrap().as_slice(), b"legacy peer data");
}

#[test]
fn test_derived_and_shared_schemes_do_not_interoperate() {
    // Subkey separation means a container sealed under the derived scheme
    // must not authenticate under the raw-key scheme, and vice versa.
    let key = generate_key();
    let derived = AuthenticatedEncryptor::new(&key).unwrap();
    let shared = AuthenticatedEncryptor::with_shared_key(&key).unwrap();

    let sealed = derived.seal(b"hello").unwrap();
    assert!(matches!(shared.open(&sealed), Err(CoreError::Tampered)));

    let sealed = shared.seal(b"hello").unwrap();
    assert!(matches!(derived.open(&sealed), Err(CoreError::Tampered)));
}

#[test]
fn test_open_parts_enforces_field_count() {
    let key = generate_key();
    let enc = AuthenticatedEncryptor::new(&key).unwrap();
    let sealed = enc.seal(b"payload").unwrap();

    let two = vec![sealed.ciphertext.clone(), sealed.iv.clone()];
    assert!(matches!(enc.open_parts(two), Err(CoreError::Malformed)));

    let four = vec![
        sealed.ciphertext.clone(),
        sealed.iv.clone(),
        sealed.tag.clone(),
        ByteBuf::from(b"extra".as_slice()),
    ];
    assert!(matches!(enc.open_parts(four), Err(CoreError::Malformed)));

    let three = vec![sealed.ciphertext, sealed.iv, sealed.tag];
    assert_eq!(enc.open_parts(three).unwrap().as_slice(), b"payload");
}

#[test]
fn test_plain_decrypt_gives_garbage_not_errors() {
    // CTR decryption with the wrong key must not crash; it yields bytes of
    // the expected length that are worthless until authenticated.
    let cipher = Aes256CtrCipher;
    let k1 = generate_key();
    let k2 = generate_key();

    let plaintext = [42u8; 32];
    let (ciphertext, iv) = cipher.encrypt(&k1, &plaintext).unwrap();
    let garbage = cipher
        .decrypt(&k2, iv.as_slice(), ciphertext.as_slice())
        .unwrap();

    assert_eq!(garbage.len(), plaintext.len());
    assert_ne!(garbage.as_slice(), plaintext);
}

#[test]
fn test_decrypt_rejects_wrong_iv_length() {
    let cipher = Aes256CtrCipher;
    let key = generate_key();
    let err = cipher.decrypt(&key, b"short-iv", b"whatever").unwrap_err();
    assert!(matches!(err, CoreError::InvalidIv { expected: 16 }));
}
