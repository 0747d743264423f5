use std::collections::HashMap;

use tracing::debug;

use super::known_value::KnownValue;

/// A bidirectional index of Known Values by raw value and by assigned name.
///
/// Both indexes hold the same `KnownValue` instances: whenever a name
/// resolves, the value it resolves to is also the one registered under its
/// raw value, carrying that name. A store can override the name a Known
/// Value was constructed with, so rendering through a store may differ from
/// [`KnownValue::name`].
///
/// Unregistered values and names are an ordinary outcome and come back as
/// `None`. A cloned store owns its own copy of both indexes.
///
/// ```
/// use known_value_registry::{IS_A, KnownValue, KnownValuesStore, SIGNED};
///
/// let store = KnownValuesStore::new([IS_A, SIGNED]);
/// assert_eq!(store.known_value_named("isA"), Some(&IS_A));
/// assert_eq!(store.name(KnownValue::new(3)), "signed");
///
/// let mut scratch = store.clone();
/// scratch.insert(KnownValue::new_with_name(3u64, "sig"));
/// assert_eq!(scratch.name(SIGNED), "sig");
/// assert_eq!(store.name(SIGNED), "signed");
/// ```
#[derive(Clone, Debug, Default)]
pub struct KnownValuesStore {
    known_values_by_raw_value: HashMap<u64, KnownValue>,
    known_values_by_assigned_name: HashMap<String, KnownValue>,
}

impl KnownValuesStore {
    /// Builds a store by inserting each value in order, so later entries win
    /// when raw values collide.
    pub fn new<T>(known_values: T) -> Self
    where
        T: IntoIterator<Item = KnownValue>,
    {
        let mut store = Self::default();
        store.extend(known_values);
        store
    }

    /// Registers a Known Value, replacing any entry with the same raw value.
    ///
    /// The replaced entry's name stops resolving. If another raw value
    /// currently answers to the inserted name, lookup by that name moves to
    /// the inserted value; the other entry is left in place with its name
    /// unchanged, so it still renders the same way.
    ///
    /// ```
    /// use known_value_registry::{KnownValue, KnownValuesStore};
    ///
    /// let mut store = KnownValuesStore::default();
    /// store.insert(KnownValue::new_with_name(4u64, "note"));
    /// store.insert(KnownValue::new_with_name(4u64, "memo"));
    ///
    /// assert!(store.known_value_named("note").is_none());
    /// assert_eq!(store.known_value_named("memo").unwrap().value(), 4);
    /// ```
    pub fn insert(&mut self, known_value: KnownValue) {
        let raw_value = known_value.value();

        // Drop the replaced value's name, unless the name has since moved to
        // another codepoint.
        if let Some(old_name) = self
            .known_values_by_raw_value
            .get(&raw_value)
            .and_then(KnownValue::assigned_name)
            && self
                .known_values_by_assigned_name
                .get(old_name)
                .is_some_and(|holder| holder.value() == raw_value)
        {
            self.known_values_by_assigned_name.remove(old_name);
        }

        if let Some(name) = known_value.assigned_name() {
            if let Some(holder) = self.known_values_by_assigned_name.get(name)
                && holder.value() != raw_value
            {
                debug!(
                    known_value_name = name,
                    from = holder.value(),
                    to = raw_value,
                    "reassigning known value name"
                );
            }
            self.known_values_by_assigned_name
                .insert(name.to_string(), known_value.clone());
        }

        self.known_values_by_raw_value.insert(raw_value, known_value);
    }

    /// The name this store has on file for `known_value`'s raw value, which
    /// may differ from the name the instance itself carries.
    pub fn assigned_name(&self, known_value: &KnownValue) -> Option<&str> {
        self.known_values_by_raw_value
            .get(&known_value.value())
            .and_then(KnownValue::assigned_name)
    }

    /// The store's name for `known_value`, falling back to
    /// [`KnownValue::name`].
    pub fn name(&self, known_value: KnownValue) -> String {
        Self::name_for_known_value(known_value, Some(self))
    }

    pub fn known_value_named(&self, assigned_name: &str) -> Option<&KnownValue> {
        self.known_values_by_assigned_name.get(assigned_name)
    }

    /// Looks up a Known Value by raw value.
    ///
    /// ```
    /// use known_value_registry::{KnownValuesStore, NOTE};
    ///
    /// let store = KnownValuesStore::new([NOTE]);
    /// assert_eq!(store.known_value_for_value(4u64), Some(&NOTE));
    /// assert!(store.known_value_for_value(5u32).is_none());
    /// ```
    pub fn known_value_for_value(
        &self,
        raw_value: impl Into<u64>,
    ) -> Option<&KnownValue> {
        self.known_values_by_raw_value.get(&raw_value.into())
    }

    /// Whether `known_value`'s raw value is registered, whatever its name.
    pub fn contains(&self, known_value: &KnownValue) -> bool {
        self.known_values_by_raw_value
            .contains_key(&known_value.value())
    }

    /// Number of registered raw values.
    pub fn len(&self) -> usize { self.known_values_by_raw_value.len() }

    /// Whether no raw values are registered.
    pub fn is_empty(&self) -> bool { self.known_values_by_raw_value.is_empty() }

    /// The registered Known Values in ascending raw-value order.
    pub fn iter(&self) -> impl Iterator<Item = &KnownValue> {
        let mut known_values: Vec<&KnownValue> =
            self.known_values_by_raw_value.values().collect();
        known_values.sort();
        known_values.into_iter()
    }

    /// Resolves a raw value through an optional store, producing a nameless
    /// Known Value when the store is absent or has no entry.
    ///
    /// ```
    /// use known_value_registry::{IS_A, KnownValuesStore};
    ///
    /// let store = KnownValuesStore::new([IS_A]);
    /// let found = KnownValuesStore::known_value_for_raw_value(1, Some(&store));
    /// assert_eq!(found.name(), "isA");
    /// let fresh = KnownValuesStore::known_value_for_raw_value(1, None);
    /// assert_eq!(fresh.name(), "1");
    /// ```
    pub fn known_value_for_raw_value(
        raw_value: u64,
        known_values: Option<&Self>,
    ) -> KnownValue {
        known_values
            .and_then(|store| store.known_value_for_value(raw_value))
            .cloned()
            .unwrap_or_else(|| KnownValue::new(raw_value))
    }

    /// Resolves a name through an optional store. Without a store nothing
    /// resolves.
    pub fn known_value_for_name(
        name: &str,
        known_values: Option<&Self>,
    ) -> Option<KnownValue> {
        known_values?.known_value_named(name).cloned()
    }

    /// Renders `known_value` using the store's name if one is on file,
    /// otherwise [`KnownValue::name`].
    ///
    /// ```
    /// use known_value_registry::{IS_A, KnownValue, KnownValuesStore};
    ///
    /// let store = KnownValuesStore::new([IS_A]);
    /// assert_eq!(
    ///     KnownValuesStore::name_for_known_value(KnownValue::new(1), Some(&store)),
    ///     "isA"
    /// );
    /// assert_eq!(
    ///     KnownValuesStore::name_for_known_value(KnownValue::new(999), Some(&store)),
    ///     "999"
    /// );
    /// ```
    pub fn name_for_known_value(
        known_value: KnownValue,
        known_values: Option<&Self>,
    ) -> String {
        known_values
            .and_then(|store| store.assigned_name(&known_value))
            .map(str::to_string)
            .unwrap_or_else(|| known_value.name())
    }
}

impl Extend<KnownValue> for KnownValuesStore {
    fn extend<T: IntoIterator<Item = KnownValue>>(&mut self, iter: T) {
        for known_value in iter {
            self.insert(known_value);
        }
    }
}

impl FromIterator<KnownValue> for KnownValuesStore {
    fn from_iter<T: IntoIterator<Item = KnownValue>>(iter: T) -> Self {
        Self::new(iter)
    }
}
