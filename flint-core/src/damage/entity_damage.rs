//! Damage types that credit an attacker.
//!
//! Both types only hold [`EntityRef`]s. The projectile in particular is
//! usually discarded right after it hits, so read these during damage
//! resolution and do not keep them around.

use super::{DamageType, DataSlot};
use crate::entity::EntityRef;

/// Damage dealt directly by an entity.
#[derive(Debug, Clone)]
pub struct EntityDamage {
    damager: EntityRef,
    data: DataSlot,
}

impl EntityDamage {
    /// Identifier shared by all entity damage.
    pub const IDENTIFIER: &'static str = "entity_source";

    /// Damage dealt directly by `damager`.
    #[must_use]
    pub const fn new(damager: EntityRef) -> Self {
        Self {
            damager,
            data: DataSlot::new(),
        }
    }

    /// The entity credited with the damage.
    #[must_use]
    pub const fn damager(&self) -> EntityRef {
        self.damager
    }
}

impl DamageType for EntityDamage {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn data_slot(&self) -> &DataSlot {
        &self.data
    }

    fn causing_entity(&self) -> Option<EntityRef> {
        Some(self.damager)
    }

    fn direct_entity(&self) -> Option<EntityRef> {
        Some(self.damager)
    }
}

/// Damage dealt by a projectile, optionally fired by a shooter.
#[derive(Debug, Clone)]
pub struct EntityProjectileDamage {
    shooter: Option<EntityRef>,
    projectile: EntityRef,
    data: DataSlot,
}

impl EntityProjectileDamage {
    /// Identifier shared by all projectile damage.
    pub const IDENTIFIER: &'static str = "projectile_source";

    /// Damage dealt by `projectile`, fired by `shooter` if there was one.
    #[must_use]
    pub const fn new(shooter: Option<EntityRef>, projectile: EntityRef) -> Self {
        Self {
            shooter,
            projectile,
            data: DataSlot::new(),
        }
    }

    /// Who fired the projectile. `None` for ownerless projectiles such as
    /// dispenser arrows.
    #[must_use]
    pub const fn shooter(&self) -> Option<EntityRef> {
        self.shooter
    }

    /// The projectile itself.
    #[must_use]
    pub const fn projectile(&self) -> EntityRef {
        self.projectile
    }
}

impl DamageType for EntityProjectileDamage {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn data_slot(&self) -> &DataSlot {
        &self.data
    }

    fn causing_entity(&self) -> Option<EntityRef> {
        self.shooter
    }

    fn direct_entity(&self) -> Option<EntityRef> {
        Some(self.projectile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use flint_utils::{Message, sound_events};

    #[test]
    fn entity_damage_attribution() {
        let damage = EntityDamage::new(EntityRef::from_id(5));
        assert_eq!(damage.damager(), EntityRef::from_id(5));
        assert_eq!(damage.causing_entity(), Some(EntityRef::from_id(5)));
        assert_eq!(damage.direct_entity(), Some(EntityRef::from_id(5)));
    }

    #[test]
    fn projectile_attribution() {
        let shot = EntityProjectileDamage::new(Some(EntityRef::from_id(1)), EntityRef::from_id(9));
        assert_eq!(shot.shooter(), Some(EntityRef::from_id(1)));
        assert_eq!(shot.projectile(), EntityRef::from_id(9));
        assert_eq!(shot.causing_entity(), Some(EntityRef::from_id(1)));
        assert_eq!(shot.direct_entity(), Some(EntityRef::from_id(9)));

        let stray = EntityProjectileDamage::new(None, EntityRef::from_id(9));
        assert_eq!(stray.shooter(), None);
        assert_eq!(stray.causing_entity(), None);
        assert_eq!(stray.direct_entity(), Some(EntityRef::from_id(9)));
    }

    #[test]
    fn attacker_variants_keep_default_resolution() {
        let victim = Player::offline(2, "Alex");
        let shot = EntityProjectileDamage::new(None, EntityRef::from_id(9));
        assert_eq!(shot.sound(&victim), Some(sound_events::ENTITY_PLAYER_HURT));
        assert_eq!(
            shot.death_message(&victim),
            Some(Message::translate("death.projectile_source").with_arg("Alex"))
        );
    }
}
