//! Entity abstractions consumed by the damage system.
//!
//! The damage system never owns entities. It refers to them through
//! [`EntityRef`], which only stores an id and is resolved against an
//! [`EntityLookup`] (normally the world's [`EntityRegistry`]) when needed.

mod kinds;
mod living_base;
mod registry;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use uuid::Uuid;

use crate::player::Player;

pub use kinds::{Mob, Projectile};
pub use living_base::{LivingEntityBase, PLAYER_MAX_HEALTH};
pub use registry::EntityRegistry;

/// Core fields every entity carries.
pub struct EntityBase {
    /// Network id, unique among the entities of one registry.
    pub id: i32,
    /// Persistent unique id.
    pub uuid: Uuid,
    removed: AtomicBool,
}

impl EntityBase {
    /// Creates a new base for an entity that has not been removed.
    #[must_use]
    pub const fn new(id: i32, uuid: Uuid) -> Self {
        Self {
            id,
            uuid,
            removed: AtomicBool::new(false),
        }
    }

    /// Whether the entity has been removed from its world.
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Relaxed)
    }

    /// Flags the entity as removed.
    #[inline]
    pub fn set_removed(&self) {
        self.removed.store(true, Ordering::Relaxed);
    }
}

/// Anything that exists in a world.
pub trait Entity: Send + Sync {
    /// The shared core fields.
    fn entity_base(&self) -> &EntityBase;

    /// The name shown in chat and death messages.
    fn name(&self) -> &str;

    /// Network id of this entity.
    fn id(&self) -> i32 {
        self.entity_base().id
    }

    /// Persistent unique id of this entity.
    fn uuid(&self) -> Uuid {
        self.entity_base().uuid
    }

    /// Whether this entity has been removed from its world.
    fn is_removed(&self) -> bool {
        self.entity_base().is_removed()
    }

    /// Returns this entity as a living entity, if it is one.
    fn as_living(&self) -> Option<&dyn LivingEntity> {
        None
    }
}

/// An entity with health that can be hurt and killed.
pub trait LivingEntity: Entity {
    /// Shared living-entity state.
    fn living_base(&self) -> &LivingEntityBase;

    /// Returns this entity as a player, if it is one.
    fn as_player(&self) -> Option<&Player> {
        None
    }
}

/// Resolves entity ids to live entities.
pub trait EntityLookup {
    /// Returns the entity registered under `id`, if any.
    fn entity(&self, id: i32) -> Option<Arc<dyn Entity>>;
}

/// A non-owning reference to an entity.
///
/// The referenced entity may be removed at any time. Resolve it with
/// [`EntityRef::resolve`] during the event that produced it and treat `None`
/// as "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    id: i32,
}

impl EntityRef {
    /// Creates a reference to the entity with the given network id.
    #[must_use]
    pub const fn from_id(id: i32) -> Self {
        Self { id }
    }

    /// Creates a reference to `entity`.
    #[must_use]
    pub fn of(entity: &(impl Entity + ?Sized)) -> Self {
        Self::from_id(entity.id())
    }

    /// The referenced entity id.
    #[must_use]
    pub const fn id(self) -> i32 {
        self.id
    }

    /// Looks the entity up, returning `None` if it is unknown or was removed.
    pub fn resolve(self, lookup: &(impl EntityLookup + ?Sized)) -> Option<Arc<dyn Entity>> {
        let entity = lookup.entity(self.id)?;
        if entity.is_removed() {
            log::debug!("Entity {} is removed, treating it as unknown", self.id);
            return None;
        }
        Some(entity)
    }
}
