//! Damage types with no attacker.

use flint_utils::{SoundEvent, sound_events};
use serde::{Deserialize, Serialize};

use super::{DamageType, DataSlot};
use crate::entity::LivingEntity;
use crate::player::Player;

/// How a damage type is felt, selecting the hurt sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageEffects {
    /// Stock hurt sounds.
    #[default]
    Hurt,
    /// Fire and lava. Players use the burning hurt sound.
    Burning,
    /// Players use the drowning hurt sound.
    Drowning,
    /// Powder snow. Players use the freezing hurt sound.
    Freezing,
    /// Sweet berry bushes. Players use the poking hurt sound.
    Poking,
    /// Every victim hears the thorns hit sound.
    Thorns,
}

impl DamageEffects {
    /// Player hurt sound for this effect.
    #[must_use]
    pub const fn player_sound(self) -> SoundEvent {
        match self {
            Self::Hurt => sound_events::ENTITY_PLAYER_HURT,
            Self::Burning => sound_events::ENTITY_PLAYER_HURT_ON_FIRE,
            Self::Drowning => sound_events::ENTITY_PLAYER_HURT_DROWN,
            Self::Freezing => sound_events::ENTITY_PLAYER_HURT_FREEZE,
            Self::Poking => sound_events::ENTITY_PLAYER_HURT_SWEET_BERRY_BUSH,
            Self::Thorns => sound_events::ENCHANT_THORNS_HIT,
        }
    }

    /// Hurt sound for non-player victims. Only thorns changes it.
    #[must_use]
    pub const fn generic_sound(self) -> SoundEvent {
        match self {
            Self::Thorns => sound_events::ENCHANT_THORNS_HIT,
            _ => sound_events::ENTITY_GENERIC_HURT,
        }
    }
}

/// An environmental damage type: an identifier plus its [`DamageEffects`].
#[derive(Debug, Clone)]
pub struct SimpleDamage {
    identifier: &'static str,
    effects: DamageEffects,
    data: DataSlot,
}

impl SimpleDamage {
    /// Creates a damage type with stock hurt sounds.
    #[must_use]
    pub const fn new(identifier: &'static str) -> Self {
        Self::with_effects(identifier, DamageEffects::Hurt)
    }

    /// Creates a damage type whose hurt sounds follow `effects`.
    #[must_use]
    pub const fn with_effects(identifier: &'static str, effects: DamageEffects) -> Self {
        Self {
            identifier,
            effects,
            data: DataSlot::new(),
        }
    }
}

impl DamageType for SimpleDamage {
    fn identifier(&self) -> &str {
        self.identifier
    }

    fn data_slot(&self) -> &DataSlot {
        &self.data
    }

    fn generic_sound(&self, _victim: &dyn LivingEntity) -> Option<SoundEvent> {
        Some(self.effects.generic_sound())
    }

    fn player_sound(&self, _player: &Player) -> Option<SoundEvent> {
        Some(self.effects.player_sound())
    }
}
