//! Registry of named damage types.

use std::ops::Deref;
use std::sync::Arc;

use flint_utils::Identifier;
use rustc_hash::FxHashMap;

use super::{DamageError, DamageType, vanilla};

/// A registered damage type: either a vanilla static or a runtime-defined one.
#[derive(Debug, Clone)]
pub enum DamageTypeRef {
    /// One of the [`vanilla`] statics.
    Static(&'static dyn DamageType),
    /// A damage type created at runtime.
    Shared(Arc<dyn DamageType>),
}

impl Deref for DamageTypeRef {
    type Target = dyn DamageType;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Static(damage_type) => *damage_type,
            Self::Shared(damage_type) => damage_type.as_ref(),
        }
    }
}

/// Maps registry keys to damage types.
///
/// Keys are unique, identifiers are not: two keys may point at damage types
/// that share one templating identifier.
pub struct DamageTypeRegistry {
    types: FxHashMap<Identifier, DamageTypeRef>,
    allows_registering: bool,
}

impl DamageTypeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// A registry holding every [`vanilla`] damage type.
    #[must_use]
    pub fn new_vanilla() -> Self {
        let mut registry = Self::new();
        for (key, damage_type) in vanilla::all() {
            registry
                .types
                .insert(key, DamageTypeRef::Static(damage_type));
        }
        registry
    }

    /// Registers a damage type under `key`.
    ///
    /// # Errors
    /// Returns [`DamageError::DuplicateKey`] if `key` is taken.
    ///
    /// # Panics
    /// Panics if the registry has been frozen.
    pub fn register(
        &mut self,
        key: Identifier,
        damage_type: Arc<dyn DamageType>,
    ) -> Result<(), DamageError> {
        assert!(
            self.allows_registering,
            "Cannot register damage types after the registry has been frozen"
        );
        if self.types.contains_key(&key) {
            return Err(DamageError::DuplicateKey(key));
        }
        log::debug!(
            "Registered damage type {key} ({})",
            damage_type.identifier()
        );
        self.types.insert(key, DamageTypeRef::Shared(damage_type));
        Ok(())
    }

    /// Stops further registration.
    pub const fn freeze(&mut self) {
        self.allows_registering = false;
    }

    /// Looks up a damage type by key.
    #[must_use]
    pub fn by_key(&self, key: &Identifier) -> Option<&DamageTypeRef> {
        self.types.get(key)
    }

    /// Number of registered damage types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for DamageTypeRegistry {
    fn default() -> Self {
        Self::new_vanilla()
    }
}
