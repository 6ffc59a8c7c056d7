//! Damage type system.
//!
//! A [`DamageType`] describes *why* a living entity was hurt and decides the
//! side effects of that: the hurt sound, the death message broadcast to other
//! players and the text on the victim's death screen. The trait is open, so
//! plugins add causes by implementing it instead of extending a central enum.
//!
//! Simple causes are shared statics (see [`vanilla`]). Causes that carry an
//! attacker are created per event through [`from_entity`], [`from_player`]
//! and [`from_projectile`].

mod custom;
mod data;
mod entity_damage;
mod event;
mod registry;
mod simple;
pub mod stock;
pub mod vanilla;

use std::fmt;
use std::sync::Arc;

use flint_utils::{Identifier, Message, SoundEvent};
use thiserror::Error;

use crate::entity::{Entity, EntityRef, LivingEntity};
use crate::player::Player;

pub use custom::CustomDamage;
pub use data::{Data, DataSlot};
pub use entity_damage::{EntityDamage, EntityProjectileDamage};
pub use event::{DamageEvent, DeathReport, MessageSink, SoundSink};
pub use registry::{DamageTypeRef, DamageTypeRegistry};
pub use simple::{DamageEffects, SimpleDamage};

/// Errors raised while building damage types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DamageError {
    /// A projectile damage source was requested without a projectile.
    #[error("Projectile damage requires a projectile entity")]
    MissingProjectile,
    /// A damage type key was registered twice.
    #[error("Damage type `{0}` is already registered")]
    DuplicateKey(Identifier),
}

/// A category of harm.
///
/// Implementors provide an identifier and a [`DataSlot`]; everything else has
/// a default that can be overridden per cause. Any `Option` result may be
/// `None` to suppress that effect entirely.
pub trait DamageType: Send + Sync + fmt::Debug {
    /// Templating key of this damage type, e.g. `attack.onFire`.
    ///
    /// Not unique: several damage types may share one identifier.
    fn identifier(&self) -> &str;

    /// Storage for caller-attached side data.
    fn data_slot(&self) -> &DataSlot;

    /// Sound played when a non-player living entity is hurt.
    fn generic_sound(&self, victim: &dyn LivingEntity) -> Option<SoundEvent> {
        stock::generic_sound(victim)
    }

    /// Sound played when a player is hurt.
    fn player_sound(&self, player: &Player) -> Option<SoundEvent> {
        stock::player_sound(player)
    }

    /// Resolves the hurt sound for `victim`, dispatching to
    /// [`player_sound`](Self::player_sound) for players and to
    /// [`generic_sound`](Self::generic_sound) for everything else.
    fn sound(&self, victim: &dyn LivingEntity) -> Option<SoundEvent> {
        match victim.as_player() {
            Some(player) => self.player_sound(player),
            None => self.generic_sound(victim),
        }
    }

    /// Message broadcast to other players when `victim` dies.
    fn death_message(&self, victim: &dyn LivingEntity) -> Option<Message> {
        stock::death_message(self.identifier(), victim)
    }

    /// Text shown on the victim's own death screen.
    fn death_screen_text(&self, victim: &dyn LivingEntity) -> Option<Message> {
        stock::death_screen_text(self.identifier(), victim)
    }

    /// The entity ultimately responsible, e.g. the shooter of a projectile.
    fn causing_entity(&self) -> Option<EntityRef> {
        None
    }

    /// The entity that directly dealt the damage, e.g. the projectile itself.
    fn direct_entity(&self) -> Option<EntityRef> {
        None
    }

    /// The attached side data, if any.
    fn data(&self) -> Option<Arc<Data>> {
        self.data_slot().get()
    }

    /// Replaces the attached side data. `None` detaches it.
    fn set_data(&self, data: Option<Data>) {
        self.data_slot().set(data);
    }
}

/// Damage dealt by a projectile, credited to its shooter if there is one.
///
/// # Errors
/// Returns [`DamageError::MissingProjectile`] if `projectile` is `None`.
pub fn from_projectile(
    shooter: Option<EntityRef>,
    projectile: Option<EntityRef>,
) -> Result<EntityProjectileDamage, DamageError> {
    let projectile = projectile.ok_or(DamageError::MissingProjectile)?;
    Ok(EntityProjectileDamage::new(shooter, projectile))
}

/// Damage dealt directly by a player.
#[must_use]
pub fn from_player(player: &Player) -> EntityDamage {
    EntityDamage::new(EntityRef::of(player))
}

/// Damage dealt directly by any entity.
#[must_use]
pub fn from_entity(entity: &dyn Entity) -> EntityDamage {
    EntityDamage::new(EntityRef::of(entity))
}
