// tests/container_tests.rs
use sealed_token::buffer::ByteBuf;
use sealed_token::container::SealedContainer;
use sealed_token::encoding::{Base64Encoding, TextEncoding};
use sealed_token::error::CoreError;
use sealed_token::key_ops::generate_key;
use sealed_token::seal::AuthenticatedEncryptor;

#[test]
fn test_from_parts_requires_exactly_three_fields() {
    let field = || ByteBuf::from(b"bytes".as_slice());

    assert!(matches!(
        SealedContainer::from_parts(vec![field(), field()]),
        Err(CoreError::Malformed)
    ));
    assert!(matches!(
        SealedContainer::from_parts(vec![field(), field(), field(), field()]),
        Err(CoreError::Malformed)
    ));

    let container = SealedContainer::from_parts(vec![field(), field(), field()]).unwrap();
    assert_eq!(container.parts().len(), 3);
}

#[test]
fn test_text_transport_roundtrip() {
    let key = generate_key();
    let enc = AuthenticatedEncryptor::new(&key).unwrap();
    let sealed = enc.seal(b"ride the wire").unwrap();

    let encoding = Base64Encoding;
    let wire = sealed.encode(&encoding);
    assert_eq!(wire.matches('|').count(), 2);

    let back = SealedContainer::decode(&wire, &encoding).unwrap();
    assert_eq!(back, sealed);
    assert_eq!(enc.open(&back).unwrap().as_slice(), b"ride the wire");
}

#[test]
fn test_decode_rejects_wrong_field_count() {
    let encoding = Base64Encoding;

    assert!(matches!(
        SealedContainer::decode("b25lZmllbGQ=", &encoding),
        Err(CoreError::Malformed)
    ));
    assert!(matches!(
        SealedContainer::decode("YQ==|YQ==|YQ==|YQ==", &encoding),
        Err(CoreError::Malformed)
    ));
}

#[test]
fn test_decode_rejects_bad_base64() {
    assert!(matches!(
        SealedContainer::decode("!!!|YQ==|YQ==", &Base64Encoding),
        Err(CoreError::Malformed)
    ));
}

#[test]
fn test_field_order_is_ciphertext_iv_tag() {
    let key = generate_key();
    let enc = AuthenticatedEncryptor::new(&key).unwrap();
    let sealed = enc.seal(b"ordered").unwrap();

    let encoding = Base64Encoding;
    let wire = sealed.encode(&encoding);
    let fields: Vec<&str> = wire.split('|').collect();

    assert_eq!(
        encoding.decode(fields[0]).unwrap(),
        sealed.ciphertext.as_slice()
    );
    assert_eq!(encoding.decode(fields[1]).unwrap(), sealed.iv.as_slice());
    assert_eq!(encoding.decode(fields[2]).unwrap(), sealed.tag.as_slice());
}
