//! Integration tests for the encoding and registry contract.

use bc_components::DigestProvider;
use dcbor::prelude::*;
use known_value_registry::{
    DATE, Error, IS_A, KNOWN_VALUES, KnownValue, KnownValuesStore, MAX_SAFE_INTEGER,
    NOTE, SIGNED, STANDARD_KNOWN_VALUES, TAG_KNOWN_VALUE, known_values,
};

#[test]
fn test_round_trip_beyond_safe_integer() {
    for value in [0, 1, MAX_SAFE_INTEGER, MAX_SAFE_INTEGER + 1, u64::MAX] {
        let data = KnownValue::new(value).tagged_cbor().to_cbor_data();
        let decoded = KnownValue::from_cbor_data(&data).unwrap();
        assert_eq!(decoded.value(), value);
    }
}

#[test]
fn test_safe_value_boundary() {
    let known_value = KnownValue::new(1 << 53);
    assert!(matches!(
        known_value.safe_value(),
        Err(Error::OutOfRange { .. })
    ));
    assert_eq!(known_value.value(), 9_007_199_254_740_992);
}

#[test]
fn test_reserved_tag() {
    assert_eq!(TAG_KNOWN_VALUE, 40000);
    match DATE.tagged_cbor().into_case() {
        CBORCase::Tagged(tag, item) => {
            assert_eq!(tag.value(), TAG_KNOWN_VALUE);
            assert_eq!(item, CBOR::from(16u64));
        }
        other => panic!("expected a tagged value, got {other:?}"),
    }
}

#[test]
fn test_conversions_through_cbor() {
    let cbor: CBOR = SIGNED.into();
    let decoded: KnownValue = cbor.try_into().unwrap();
    assert_eq!(decoded, SIGNED);

    let untagged = CBOR::from(3u64);
    assert!(KnownValue::try_from(untagged.clone()).is_err());
    assert_eq!(KnownValue::from_cbor(untagged).unwrap(), SIGNED);
}

#[test]
fn test_wrong_tag_is_rejected() {
    let data = hex::decode("d86401").unwrap();
    let result = KnownValue::from_cbor_data(&data);
    assert!(matches!(
        result,
        Err(Error::Cbor(dcbor::Error::WrongTag(_, _)))
    ));
}

#[test]
fn test_malformed_bytes_are_rejected() {
    assert!(matches!(
        KnownValue::from_cbor_data([0xd9, 0x9c]),
        Err(Error::Cbor(_))
    ));
}

#[test]
fn test_digest_ignores_name() {
    let named = KnownValue::new_with_name(4u64, "memo");
    assert_eq!(named.digest(), NOTE.digest());
}

#[test]
fn test_store_rename_on_collision() {
    let mut store = KnownValuesStore::default();
    store.insert(KnownValue::new_with_name(4u64, "note"));
    store.insert(KnownValue::new_with_name(4u64, "memo"));

    assert!(store.known_value_named("note").is_none());
    assert_eq!(store.known_value_named("memo").unwrap().value(), 4);
    assert_eq!(
        store.known_value_for_value(4u64).unwrap().assigned_name(),
        Some("memo")
    );
}

#[test]
fn test_store_clone_is_independent() {
    let mut original = KnownValuesStore::new([IS_A]);
    let mut clone = original.clone();

    clone.insert(KnownValue::new_with_name(2000u64, "cloneOnly"));
    original.insert(KnownValue::new_with_name(3000u64, "originalOnly"));

    assert!(original.known_value_for_value(2000u64).is_none());
    assert!(clone.known_value_for_value(3000u64).is_none());
    assert!(clone.known_value_named("isA").is_some());
}

#[test]
fn test_global_registry() {
    let outer = known_values();
    let inner: &KnownValuesStore = &KNOWN_VALUES;
    assert!(std::ptr::eq(outer, inner));
    assert_eq!(inner.known_value_named("isA").unwrap().value(), 1);
}

#[test]
fn test_global_registry_is_the_standard_table() {
    let store = known_values();
    assert_eq!(store.len(), STANDARD_KNOWN_VALUES.len());
    assert_eq!(store.name(DATE), "date");
    assert_eq!(store.name(IS_A), "isA");
    assert!(STANDARD_KNOWN_VALUES.iter().all(|value| store.contains(value)));
}

#[test]
fn test_decoded_values_resolve_names_through_registry() {
    let data = NOTE.tagged_cbor().to_cbor_data();
    let decoded = KnownValue::from_cbor_data(data).unwrap();

    let store = Some(known_values());
    assert_eq!(KnownValuesStore::name_for_known_value(decoded, store), "note");
    assert_eq!(
        KnownValuesStore::name_for_known_value(KnownValue::new(99_999), store),
        "99999"
    );
}
