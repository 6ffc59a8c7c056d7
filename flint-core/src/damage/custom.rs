//! Damage types defined at runtime, typically from the server config.

use flint_utils::{Message, SoundEvent};

use super::{DamageType, DataSlot};
use crate::entity::LivingEntity;
use crate::player::Player;

/// A damage type whose behavior comes from data instead of code.
///
/// Each sound is `None` to keep the stock sound, `Some(None)` to stay silent
/// or `Some(Some(sound))` to play a specific sound.
#[derive(Debug, Clone)]
pub struct CustomDamage {
    identifier: String,
    generic_sound: Option<Option<SoundEvent>>,
    player_sound: Option<Option<SoundEvent>>,
    announce_death: bool,
    data: DataSlot,
}

impl CustomDamage {
    /// A custom damage type with stock sounds and an announced death.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            generic_sound: None,
            player_sound: None,
            announce_death: true,
            data: DataSlot::new(),
        }
    }

    /// Overrides the non-player hurt sound. `None` silences it.
    #[must_use]
    pub fn with_generic_sound(mut self, sound: Option<SoundEvent>) -> Self {
        self.generic_sound = Some(sound);
        self
    }

    /// Overrides the player hurt sound. `None` silences it.
    #[must_use]
    pub fn with_player_sound(mut self, sound: Option<SoundEvent>) -> Self {
        self.player_sound = Some(sound);
        self
    }

    /// Whether deaths are broadcast to other players.
    #[must_use]
    pub const fn with_announced_death(mut self, announce: bool) -> Self {
        self.announce_death = announce;
        self
    }
}

impl DamageType for CustomDamage {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn data_slot(&self) -> &DataSlot {
        &self.data
    }

    fn generic_sound(&self, victim: &dyn LivingEntity) -> Option<SoundEvent> {
        match &self.generic_sound {
            Some(sound) => sound.clone(),
            None => super::stock::generic_sound(victim),
        }
    }

    fn player_sound(&self, player: &Player) -> Option<SoundEvent> {
        match &self.player_sound {
            Some(sound) => sound.clone(),
            None => super::stock::player_sound(player),
        }
    }

    fn death_message(&self, victim: &dyn LivingEntity) -> Option<Message> {
        if self.announce_death {
            super::stock::death_message(self.identifier(), victim)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Mob;
    use flint_utils::sound_events;

    #[test]
    fn unset_sounds_fall_back_to_stock() {
        let damage = CustomDamage::new("arena.spikes");
        let player = Player::offline(1, "Steve");
        let zombie = Mob::new(2, "Zombie", 20.0);
        assert_eq!(damage.sound(&player), Some(sound_events::ENTITY_PLAYER_HURT));
        assert_eq!(damage.sound(&zombie), Some(sound_events::ENTITY_GENERIC_HURT));
    }

    #[test]
    fn overrides_and_silence() {
        let damage = CustomDamage::new("arena.acid")
            .with_player_sound(Some(sound_events::ENTITY_PLAYER_HURT_DROWN))
            .with_generic_sound(None);
        let player = Player::offline(1, "Steve");
        let zombie = Mob::new(2, "Zombie", 20.0);
        assert_eq!(
            damage.sound(&player),
            Some(sound_events::ENTITY_PLAYER_HURT_DROWN)
        );
        assert_eq!(damage.sound(&zombie), None);
    }

    #[test]
    fn announced_death_uses_stock_message() {
        let damage = CustomDamage::new("arena.acid");
        let player = Player::offline(1, "Steve");
        assert_eq!(
            damage.death_message(&player),
            Some(Message::translate("death.arena.acid").with_arg("Steve"))
        );
    }

    #[test]
    fn unannounced_death_still_has_death_screen() {
        let damage = CustomDamage::new("arena.acid").with_announced_death(false);
        let player = Player::offline(1, "Steve");
        assert_eq!(damage.death_message(&player), None);
        assert_eq!(
            damage.death_screen_text(&player),
            Some(Message::translate("death.arena.acid"))
        );
    }
}
