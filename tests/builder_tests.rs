//! tests/builder_tests.rs
//! scrypt builder – parameters, salt handling, secure-gate types

mod common;

use common::{FAST_PARAMS, TEST_PASSWORD, TEST_SALT};
use scrypt_rs::aliases::Password;
use scrypt_rs::{compute_derived_key, ScryptBuilder, ScryptError, ScryptParams};

fn password() -> Password {
    Password::new(TEST_PASSWORD.to_vec())
}

fn fast_builder() -> ScryptBuilder {
    ScryptBuilder::new()
        .with_cost(16)
        .with_block_size(1)
        .with_parallel(1)
        .with_salt(TEST_SALT)
}

#[test]
fn builder_matches_free_function() {
    let mut key = [0u8; 32];
    fast_builder().derive_secure(&password(), &mut key).unwrap();

    let expected = compute_derived_key(TEST_PASSWORD, TEST_SALT, &FAST_PARAMS, 32).unwrap();
    assert_eq!(key[..], expected[..]);
}

#[test]
fn builder_derive_secure_new() {
    let key = fast_builder().derive_secure_new(&password(), 48).unwrap();
    assert_eq!(key.expose_secret().len(), 48);

    let expected = compute_derived_key(TEST_PASSWORD, TEST_SALT, &FAST_PARAMS, 48).unwrap();
    assert_eq!(key.expose_secret(), &expected);
}

#[test]
fn builder_without_salt_is_null_input() {
    let mut key = [0u8; 16];
    let err = ScryptBuilder::new()
        .with_cost(16)
        .with_block_size(1)
        .derive_secure(&password(), &mut key)
        .unwrap_err();

    assert_eq!(err, ScryptError::NullInput("salt"));
    assert_eq!(err.to_string(), "missing required input: salt");
}

#[test]
fn builder_validates_at_derive_time() {
    let builder = fast_builder().with_cost(3);
    assert_eq!(builder.params().cost, 3, "setters store values unvalidated");

    let err = builder.derive_secure_new(&password(), 16).unwrap_err();
    assert!(matches!(err, ScryptError::InvalidParameter { name: "cost", .. }));
}

#[test]
fn builder_default_trait() {
    let builder = ScryptBuilder::default();
    assert_eq!(*builder.params(), ScryptParams::default());
    assert_eq!(builder.salt(), None);
}

#[test]
fn builder_getters() {
    let builder = ScryptBuilder::new()
        .with_cost(1024)
        .with_block_size(4)
        .with_parallel(3)
        .with_max_threads(2)
        .with_salt([0xAA; 16]);

    assert_eq!(
        *builder.params(),
        ScryptParams::new(1024, 4, 3).with_max_threads(2)
    );
    assert_eq!(builder.salt(), Some(&[0xAA; 16][..]));
}

#[test]
fn builder_with_params() {
    let builder = ScryptBuilder::new().with_params(FAST_PARAMS);
    assert_eq!(*builder.params(), FAST_PARAMS);
}

#[test]
fn builder_clone() {
    let builder1 = fast_builder().with_parallel(2);
    let builder2 = builder1.clone();

    assert_eq!(builder1.params(), builder2.params());
    assert_eq!(builder1.salt(), builder2.salt());
}

#[test]
fn builder_stream_continues_derived_key() {
    let mut stream = fast_builder().stream(&password()).unwrap();
    let head = stream.read_bytes(10).unwrap();
    let tail = stream.read_bytes(30).unwrap();

    let expected = compute_derived_key(TEST_PASSWORD, TEST_SALT, &FAST_PARAMS, 40).unwrap();
    assert_eq!([head, tail].concat(), expected);
}

#[test]
fn builder_salt_sensitivity() {
    let a = fast_builder()
        .with_salt([0x01; 16])
        .derive_secure_new(&password(), 32)
        .unwrap();
    let b = fast_builder()
        .with_salt([0x02; 16])
        .derive_secure_new(&password(), 32)
        .unwrap();

    assert_ne!(a.expose_secret(), b.expose_secret());
}
