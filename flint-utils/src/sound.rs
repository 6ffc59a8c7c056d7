//! Sound events that can be played to observers of an entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Identifier;

/// A named sound event. Only the key is modelled, playback is owned by the
/// audio dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundEvent {
    /// The sound event registry key.
    pub key: Identifier,
}

impl SoundEvent {
    /// Creates a vanilla sound event usable in `const`/`static` context.
    #[must_use]
    pub const fn vanilla(path: &'static str) -> Self {
        Self {
            key: Identifier::vanilla_static(path),
        }
    }

    /// Creates a sound event from an arbitrary key.
    #[must_use]
    pub const fn new(key: Identifier) -> Self {
        Self { key }
    }
}

impl fmt::Display for SoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

/// Vanilla hurt sounds used by the damage taxonomy.
pub mod sound_events {
    use super::SoundEvent;

    /// Stock hurt sound for non-player living entities.
    pub const ENTITY_GENERIC_HURT: SoundEvent = SoundEvent::vanilla("entity.generic.hurt");
    /// Stock hurt sound for players.
    pub const ENTITY_PLAYER_HURT: SoundEvent = SoundEvent::vanilla("entity.player.hurt");
    /// Player hurt by fire or lava.
    pub const ENTITY_PLAYER_HURT_ON_FIRE: SoundEvent =
        SoundEvent::vanilla("entity.player.hurt_on_fire");
    /// Player drowning.
    pub const ENTITY_PLAYER_HURT_DROWN: SoundEvent =
        SoundEvent::vanilla("entity.player.hurt_drown");
    /// Player freezing in powder snow.
    pub const ENTITY_PLAYER_HURT_FREEZE: SoundEvent =
        SoundEvent::vanilla("entity.player.hurt_freeze");
    /// Player poked by a sweet berry bush.
    pub const ENTITY_PLAYER_HURT_SWEET_BERRY_BUSH: SoundEvent =
        SoundEvent::vanilla("entity.player.hurt_sweet_berry_bush");
    /// Played for every victim of thorns, player or not.
    pub const ENCHANT_THORNS_HIT: SoundEvent = SoundEvent::vanilla("enchant.thorns.hit");
}
