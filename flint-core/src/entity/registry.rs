//! Per-world entity registry.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use flint_utils::locks::SyncRwLock;
use rustc_hash::FxHashMap;

use super::{Entity, EntityLookup};

/// Owns the entities of a world and hands out ids.
pub struct EntityRegistry {
    entities: SyncRwLock<FxHashMap<i32, Arc<dyn Entity>>>,
    next_id: AtomicI32,
}

impl EntityRegistry {
    /// Creates an empty registry. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: SyncRwLock::new(FxHashMap::default()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Reserves a fresh entity id.
    pub fn next_entity_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Adds an entity, replacing any entity registered under the same id.
    pub fn add(&self, entity: Arc<dyn Entity>) {
        let id = entity.id();
        if let Some(old) = self.entities.write().insert(id, entity) {
            log::warn!("Entity id {id} was reused, replacing {}", old.name());
            old.entity_base().set_removed();
        }
    }

    /// Removes an entity and flags it as removed, so outstanding
    /// references stop resolving.
    pub fn remove(&self, id: i32) -> Option<Arc<dyn Entity>> {
        let entity = self.entities.write().remove(&id)?;
        entity.entity_base().set_removed();
        log::debug!("Removed entity {id} ({})", entity.name());
        Some(entity)
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityLookup for EntityRegistry {
    fn entity(&self, id: i32) -> Option<Arc<dyn Entity>> {
        self.entities.read().get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Projectile;

    #[test]
    fn remove_flags_entity() {
        let registry = EntityRegistry::new();
        let id = registry.next_entity_id();
        registry.add(Arc::new(Projectile::new(id, "Snowball")));
        assert_eq!(registry.len(), 1);

        let removed = registry.remove(id).expect("entity was registered");
        assert!(removed.is_removed());
        assert!(registry.entity(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_sequential() {
        let registry = EntityRegistry::new();
        assert_eq!(registry.next_entity_id(), 1);
        assert_eq!(registry.next_entity_id(), 2);
    }
}
