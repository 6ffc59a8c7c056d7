//! Stock resolution behavior shared by the `DamageType` defaults.
//!
//! Overriding implementations call these to fall back to the default for
//! one case while customizing another.

use flint_utils::{Message, SoundEvent, sound_events};

use crate::entity::LivingEntity;
use crate::player::Player;

/// `entity.generic.hurt`
#[must_use]
pub const fn generic_sound(_victim: &dyn LivingEntity) -> Option<SoundEvent> {
    Some(sound_events::ENTITY_GENERIC_HURT)
}

/// `entity.player.hurt`
#[must_use]
pub const fn player_sound(_player: &Player) -> Option<SoundEvent> {
    Some(sound_events::ENTITY_PLAYER_HURT)
}

/// `death.<identifier>,<victim name>`
#[must_use]
pub fn death_message(identifier: &str, victim: &dyn LivingEntity) -> Option<Message> {
    Some(Message::translate(format!("death.{identifier}")).with_arg(victim.name()))
}

/// `death.<identifier>`, the victim name is not part of it.
#[must_use]
pub fn death_screen_text(identifier: &str, _victim: &dyn LivingEntity) -> Option<Message> {
    Some(Message::translate(format!("death.{identifier}")))
}
