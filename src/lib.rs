//! Known Values: compact integer identifiers for ontological concepts.
//!
//! A Known Value is an unsigned integer that stands in for a frequently used
//! predicate, marker or constant, optionally paired with a human-readable
//! name. This crate follows the [Blockchain Commons Known Values
//! registry][bcr].
//!
//! ```rust
//! use known_value_registry::{IS_A, KnownValue, KnownValuesStore, NOTE};
//!
//! assert_eq!(IS_A.value(), 1);
//! assert_eq!(IS_A.name(), "isA");
//!
//! let custom = KnownValue::new_with_name(1000u64, "myCustomValue");
//! let store = KnownValuesStore::new([IS_A, NOTE, custom]);
//! assert_eq!(store.known_value_named("myCustomValue").unwrap().value(), 1000);
//! assert_eq!(store.name(KnownValue::new(4)), "note");
//! ```
//!
//! # Encoding
//!
//! A Known Value is encoded as a CBOR unsigned integer, either bare or
//! wrapped in tag [`TAG_KNOWN_VALUE`] (40000). Only the raw value is encoded;
//! names are local to a store.
//!
//! ```rust
//! use dcbor::prelude::*;
//! use known_value_registry::{KnownValue, NOTE};
//!
//! let data = NOTE.tagged_cbor().to_cbor_data();
//! let decoded = KnownValue::from_cbor_data(data).unwrap();
//! assert_eq!(decoded, NOTE);
//! assert_eq!(decoded.name(), "4");
//! ```
//!
//! # Standard registry
//!
//! [`KNOWN_VALUES`] (or [`known_values()`]) is a store holding exactly
//! [`STANDARD_KNOWN_VALUES`], built on first access.
//!
//! [bcr]: https://github.com/BlockchainCommons/Research/blob/master/papers/bcr-2023-002-known-value.md

mod error;
pub use error::{Error, Result};

mod known_value;
pub use known_value::{KnownValue, MAX_SAFE_INTEGER, TAG_KNOWN_VALUE};

mod known_value_store;
pub use known_value_store::KnownValuesStore;

mod known_values_registry;
pub use known_values_registry::*;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
