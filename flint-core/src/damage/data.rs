//! Caller-defined side data attached to damage types.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bag of arbitrary key/value data. No schema is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Data {
    values: FxHashMap<String, Value>,
}

impl Data {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts or replaces a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Optional [`Data`] slot with replace-whole-value semantics.
///
/// Reads are lock-free so the slot can live inside `static` damage types.
/// Writers swap in a complete new value; readers holding the previous
/// `Arc<Data>` keep seeing it.
pub struct DataSlot {
    data: ArcSwapOption<Data>,
}

impl DataSlot {
    /// An empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: ArcSwapOption::const_empty(),
        }
    }

    /// The attached data, or `None` if nothing was ever attached or it was
    /// cleared.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Data>> {
        self.data.load_full()
    }

    /// Replaces the attached data. `None` clears the slot.
    pub fn set(&self, data: Option<Data>) {
        self.data.store(data.map(Arc::new));
    }
}

impl Default for DataSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DataSlot {
    fn clone(&self) -> Self {
        Self {
            data: ArcSwapOption::new(self.data.load_full()),
        }
    }
}

impl fmt::Debug for DataSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DataSlot").field(&self.data.load_full()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_is_absent() {
        assert!(DataSlot::new().get().is_none());
    }

    #[test]
    fn set_then_get_returns_equal_value() {
        let slot = DataSlot::new();
        let data = Data::new().with("arena", "north").with("round", 3);
        slot.set(Some(data.clone()));
        assert_eq!(slot.get().as_deref(), Some(&data));
    }

    #[test]
    fn explicit_empty_data_is_present() {
        let slot = DataSlot::new();
        slot.set(Some(Data::new()));
        let data = slot.get().expect("explicitly set");
        assert!(data.is_empty());
    }

    #[test]
    fn set_replaces_whole_value() {
        let slot = DataSlot::new();
        slot.set(Some(Data::new().with("a", 1)));
        let before = slot.get();

        slot.set(Some(Data::new().with("b", 2)));
        let after = slot.get().expect("set");
        assert!(after.get("a").is_none());
        assert_eq!(after.get("b"), Some(&Value::from(2)));
        // Earlier readers keep their snapshot.
        assert_eq!(before.and_then(|d| d.get("a").cloned()), Some(Value::from(1)));

        slot.set(None);
        assert!(slot.get().is_none());
    }

    #[test]
    fn clone_shares_current_value_but_not_slot() {
        let slot = DataSlot::new();
        slot.set(Some(Data::new().with("a", 1)));
        let copy = slot.clone();
        slot.set(None);
        assert!(copy.get().is_some());
    }
}
