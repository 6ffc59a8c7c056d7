//! Non-player entity kinds.

use uuid::Uuid;

use super::{Entity, EntityBase, LivingEntity, LivingEntityBase};

/// A non-player living entity such as a zombie.
pub struct Mob {
    base: EntityBase,
    living: LivingEntityBase,
    name: String,
}

impl Mob {
    /// Creates a mob at full health.
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, max_health: f32) -> Self {
        Self {
            base: EntityBase::new(id, Uuid::new_v4()),
            living: LivingEntityBase::new(max_health),
            name: name.into(),
        }
    }
}

impl Entity for Mob {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_living(&self) -> Option<&dyn LivingEntity> {
        Some(self)
    }
}

impl LivingEntity for Mob {
    fn living_base(&self) -> &LivingEntityBase {
        &self.living
    }
}

/// A projectile in flight (arrow, snowball, fireball, ...).
pub struct Projectile {
    base: EntityBase,
    name: String,
}

impl Projectile {
    /// Creates a projectile.
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, Uuid::new_v4()),
            name: name.into(),
        }
    }
}

impl Entity for Projectile {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn name(&self) -> &str {
        &self.name
    }
}
