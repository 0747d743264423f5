use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use bc_components::{Digest, DigestProvider, tags};
use dcbor::prelude::*;

use crate::{Error, Result};

/// The CBOR tag reserved for Known Values.
///
/// This number is part of the wire format: every tagged Known Value carries
/// it, and changing it would make previously encoded documents unreadable.
pub const TAG_KNOWN_VALUE: u64 = tags::TAG_KNOWN_VALUE;

/// The largest integer that survives a round trip through an IEEE 754
/// double without loss (2^53 − 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

#[derive(Clone, Debug)]
enum KnownValueName {
    Static(&'static str),
    Dynamic(String),
}

impl KnownValueName {
    fn as_str(&self) -> &str {
        match self {
            KnownValueName::Static(name) => name,
            KnownValueName::Dynamic(name) => name.as_str(),
        }
    }
}

/// A value in a namespace of unsigned integers that represents a stand-alone
/// ontological concept.
///
/// Known Values let structured documents refer to frequently used predicates,
/// markers, and constants as compact integers instead of verbose strings. Any
/// Known Value may carry an optional human-readable name, but the name is
/// purely descriptive: two Known Values are equal if and only if their raw
/// values are equal.
///
/// The raw value covers the full range of a CBOR unsigned integer. Consumers
/// that can only hold integers exactly up to 2^53 − 1 should go through
/// [`KnownValue::safe_value`], which refuses to truncate.
///
/// A Known Value encodes as an unsigned integer wrapped in the tag
/// [`TAG_KNOWN_VALUE`]:
///
/// ```
/// use dcbor::prelude::*;
/// use known_value_registry::{IS_A, KnownValue};
///
/// let data = IS_A.tagged_cbor().to_cbor_data();
/// assert_eq!(data, vec![0xd9, 0x9c, 0x40, 0x01]);
///
/// let decoded = KnownValue::from_cbor_data(&data).unwrap();
/// assert_eq!(decoded, IS_A);
/// // Names do not travel over the wire.
/// assert_eq!(decoded.assigned_name(), None);
/// ```
#[derive(Clone, Debug)]
pub struct KnownValue {
    value: u64,
    assigned_name: Option<KnownValueName>,
}

impl KnownValue {
    /// Creates a new Known Value with no assigned name.
    ///
    /// ```
    /// use known_value_registry::KnownValue;
    ///
    /// let known_value = KnownValue::new(42);
    /// assert_eq!(known_value.value(), 42);
    /// assert_eq!(known_value.name(), "42");
    /// ```
    pub fn new(value: u64) -> Self { Self { value, assigned_name: None } }

    /// Creates a Known Value with an assigned name.
    ///
    /// ```
    /// use known_value_registry::KnownValue;
    ///
    /// let known_value = KnownValue::new_with_name(15u64, "salt".to_string());
    /// assert_eq!(known_value.value(), 15);
    /// assert_eq!(known_value.name(), "salt");
    /// ```
    pub fn new_with_name<T: Into<u64>>(
        value: T,
        assigned_name: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            assigned_name: Some(KnownValueName::Dynamic(assigned_name.into())),
        }
    }

    /// Creates a Known Value with a static name, usable in `const` context.
    ///
    /// This is how the registry constants are declared; see
    /// [`const_known_value!`](crate::const_known_value).
    pub const fn new_with_static_name(
        value: u64,
        assigned_name: &'static str,
    ) -> Self {
        Self {
            value,
            assigned_name: Some(KnownValueName::Static(assigned_name)),
        }
    }

    /// Returns the exact raw value.
    pub fn value(&self) -> u64 { self.value }

    /// Returns the raw value if it is at most [`MAX_SAFE_INTEGER`].
    ///
    /// Larger values fail with [`Error::OutOfRange`] rather than being
    /// truncated; use [`KnownValue::value`] for the exact integer.
    ///
    /// ```
    /// use known_value_registry::{KnownValue, MAX_SAFE_INTEGER};
    ///
    /// assert_eq!(KnownValue::new(1).safe_value().unwrap(), 1);
    ///
    /// let big = KnownValue::new(MAX_SAFE_INTEGER + 1);
    /// assert!(big.safe_value().is_err());
    /// assert_eq!(big.value(), 1 << 53);
    /// ```
    pub fn safe_value(&self) -> Result<u64> {
        if self.value > MAX_SAFE_INTEGER {
            return Err(Error::OutOfRange {
                value: self.value,
                max: MAX_SAFE_INTEGER,
            });
        }
        Ok(self.value)
    }

    /// Returns the assigned name, if there is a non-empty one.
    pub fn assigned_name(&self) -> Option<&str> {
        self.assigned_name
            .as_ref()
            .map(KnownValueName::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Returns the assigned name, or the raw value in decimal if there is
    /// none.
    pub fn name(&self) -> String {
        match self.assigned_name() {
            Some(name) => name.to_string(),
            None => self.value.to_string(),
        }
    }

    /// Decodes a Known Value from either its tagged or its untagged form.
    ///
    /// Documents may omit the tag where the surrounding structure already
    /// establishes that a slot holds a Known Value.
    ///
    /// ```
    /// use dcbor::prelude::*;
    /// use known_value_registry::KnownValue;
    ///
    /// let bare = KnownValue::from_cbor(CBOR::from(4u64)).unwrap();
    /// let tagged =
    ///     KnownValue::from_cbor(KnownValue::new(4).tagged_cbor()).unwrap();
    /// assert_eq!(bare, tagged);
    /// ```
    pub fn from_cbor(cbor: CBOR) -> Result<Self> {
        let known_value = match cbor.as_case() {
            CBORCase::Tagged(_, _) => Self::from_tagged_cbor(cbor)?,
            _ => Self::from_untagged_cbor(cbor)?,
        };
        Ok(known_value)
    }

    /// Decodes a tagged Known Value from raw CBOR bytes.
    pub fn from_cbor_data(data: impl AsRef<[u8]>) -> Result<Self> {
        let cbor = CBOR::try_from_data(data)?;
        Ok(Self::from_tagged_cbor(cbor)?)
    }
}

impl PartialEq for KnownValue {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl Eq for KnownValue {}

impl Hash for KnownValue {
    fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state); }
}

impl PartialOrd for KnownValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KnownValue {
    fn cmp(&self, other: &Self) -> Ordering { self.value.cmp(&other.value) }
}

impl Display for KnownValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl DigestProvider for KnownValue {
    fn digest(&self) -> Digest {
        Digest::from_image(self.tagged_cbor().to_cbor_data())
    }
}

impl CBORTagged for KnownValue {
    fn cbor_tags() -> Vec<Tag> { tags_for_values(&[TAG_KNOWN_VALUE]) }
}

impl From<KnownValue> for CBOR {
    fn from(value: KnownValue) -> Self { value.tagged_cbor() }
}

impl CBORTaggedEncodable for KnownValue {
    fn untagged_cbor(&self) -> CBOR { self.value.into() }
}

impl TryFrom<CBOR> for KnownValue {
    type Error = dcbor::Error;

    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(cbor)
    }
}

impl CBORTaggedDecodable for KnownValue {
    fn from_untagged_cbor(cbor: CBOR) -> dcbor::Result<Self> {
        match cbor.into_case() {
            CBORCase::Unsigned(value) => Ok(Self::new(value)),
            _ => Err(dcbor::Error::WrongType),
        }
    }
}

impl From<u64> for KnownValue {
    fn from(value: u64) -> Self { Self::new(value) }
}

impl From<u32> for KnownValue {
    fn from(value: u32) -> Self { Self::new(value.into()) }
}

impl From<u16> for KnownValue {
    fn from(value: u16) -> Self { Self::new(value.into()) }
}

impl From<u8> for KnownValue {
    fn from(value: u8) -> Self { Self::new(value.into()) }
}

impl From<usize> for KnownValue {
    fn from(value: usize) -> Self { Self::new(value as u64) }
}

impl TryFrom<i64> for KnownValue {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self::new)
            .map_err(|_| Error::Negative(value))
    }
}

impl TryFrom<i32> for KnownValue {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> { i64::from(value).try_into() }
}

/// Parses a decimal numeral into a nameless Known Value.
///
/// ```
/// use known_value_registry::KnownValue;
///
/// let known_value: KnownValue = "9007199254740993".parse().unwrap();
/// assert_eq!(known_value.value(), 9_007_199_254_740_993);
/// assert!("-1".parse::<KnownValue>().is_err());
/// ```
impl FromStr for KnownValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let numeral = s.trim();
        if numeral.is_empty() || !numeral.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::InvalidNumeral(s.to_string()));
        }
        numeral
            .parse::<u64>()
            .map(Self::new)
            .map_err(|_| Error::InvalidNumeral(s.to_string()))
    }
}
