//! Shared damage types for the built-in environmental causes.
//!
//! These are process-wide statics. Attaching side data to one of them is
//! visible to every user of that static.

use flint_utils::Identifier;

use super::{DamageEffects, DamageType, SimpleDamage};

/// Fell out of the world.
pub static VOID: SimpleDamage = SimpleDamage::new("attack.outOfWorld");
/// Fall damage.
pub static GRAVITY: SimpleDamage = SimpleDamage::new("attack.fall");
/// Burning after leaving the fire.
pub static ON_FIRE: SimpleDamage =
    SimpleDamage::with_effects("attack.onFire", DamageEffects::Burning);
/// Standing in fire.
pub static IN_FIRE: SimpleDamage =
    SimpleDamage::with_effects("attack.inFire", DamageEffects::Burning);
/// Swimming in lava.
pub static LAVA: SimpleDamage = SimpleDamage::with_effects("attack.lava", DamageEffects::Burning);
/// Running out of air.
pub static DROWN: SimpleDamage =
    SimpleDamage::with_effects("attack.drown", DamageEffects::Drowning);
/// Powder snow.
pub static FREEZE: SimpleDamage =
    SimpleDamage::with_effects("attack.freeze", DamageEffects::Freezing);
/// Walking through a grown sweet berry bush.
pub static SWEET_BERRY_BUSH: SimpleDamage =
    SimpleDamage::with_effects("attack.sweetBerryBush", DamageEffects::Poking);
/// Touching a cactus.
pub static CACTUS: SimpleDamage = SimpleDamage::new("attack.cactus");
/// An empty hunger bar.
pub static STARVE: SimpleDamage = SimpleDamage::new("attack.starve");
/// Harming potions and evoker fangs.
pub static MAGIC: SimpleDamage = SimpleDamage::new("attack.magic");
/// The wither effect.
pub static WITHER: SimpleDamage = SimpleDamage::new("attack.wither");
/// Suffocating inside a block.
pub static IN_WALL: SimpleDamage = SimpleDamage::new("attack.inWall");
/// Too many entities in one block.
pub static CRAMMING: SimpleDamage = SimpleDamage::new("attack.cramming");
/// Hitting a target wearing thorns armor.
pub static THORNS: SimpleDamage =
    SimpleDamage::with_effects("attack.thorns", DamageEffects::Thorns);
/// Damage with no more specific cause.
pub static GENERIC: SimpleDamage = SimpleDamage::new("attack.generic");
/// Used by `/kill`.
pub static GENERIC_KILL: SimpleDamage = SimpleDamage::new("attack.genericKill");

/// Every vanilla damage type with its registry key.
pub fn all() -> [(Identifier, &'static dyn DamageType); 17] {
    [
        (Identifier::vanilla_static("out_of_world"), &VOID),
        (Identifier::vanilla_static("fall"), &GRAVITY),
        (Identifier::vanilla_static("on_fire"), &ON_FIRE),
        (Identifier::vanilla_static("in_fire"), &IN_FIRE),
        (Identifier::vanilla_static("lava"), &LAVA),
        (Identifier::vanilla_static("drown"), &DROWN),
        (Identifier::vanilla_static("freeze"), &FREEZE),
        (Identifier::vanilla_static("sweet_berry_bush"), &SWEET_BERRY_BUSH),
        (Identifier::vanilla_static("cactus"), &CACTUS),
        (Identifier::vanilla_static("starve"), &STARVE),
        (Identifier::vanilla_static("magic"), &MAGIC),
        (Identifier::vanilla_static("wither"), &WITHER),
        (Identifier::vanilla_static("in_wall"), &IN_WALL),
        (Identifier::vanilla_static("cramming"), &CRAMMING),
        (Identifier::vanilla_static("thorns"), &THORNS),
        (Identifier::vanilla_static("generic"), &GENERIC),
        (Identifier::vanilla_static("generic_kill"), &GENERIC_KILL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Mob;
    use crate::player::Player;
    use flint_utils::{Message, sound_events};

    #[test]
    fn void_death_keys() {
        let alex = Player::offline(1, "Alex");
        assert_eq!(VOID.identifier(), "attack.outOfWorld");
        assert_eq!(
            VOID.death_message(&alex).map(|m| m.key()),
            Some("death.attack.outOfWorld,Alex".to_owned())
        );
        assert_eq!(
            VOID.death_screen_text(&alex),
            Some(Message::translate("death.attack.outOfWorld"))
        );
    }

    #[test]
    fn gravity_uses_stock_sounds() {
        let player = Player::offline(1, "Steve");
        let cow = Mob::new(2, "Cow", 10.0);
        assert_eq!(GRAVITY.sound(&player), Some(sound_events::ENTITY_PLAYER_HURT));
        assert_eq!(GRAVITY.sound(&cow), Some(sound_events::ENTITY_GENERIC_HURT));
    }

    #[test]
    fn on_fire_overrides_player_sound_only() {
        let player = Player::offline(1, "Steve");
        let cow = Mob::new(2, "Cow", 10.0);
        assert_eq!(
            ON_FIRE.sound(&player),
            Some(sound_events::ENTITY_PLAYER_HURT_ON_FIRE)
        );
        assert_eq!(ON_FIRE.sound(&cow), Some(sound_events::ENTITY_GENERIC_HURT));
    }

    #[test]
    fn thorns_overrides_both_sounds() {
        let player = Player::offline(1, "Steve");
        let cow = Mob::new(2, "Cow", 10.0);
        assert_eq!(THORNS.sound(&player), Some(sound_events::ENCHANT_THORNS_HIT));
        assert_eq!(THORNS.sound(&cow), Some(sound_events::ENCHANT_THORNS_HIT));
    }

    #[test]
    fn registry_keys_are_unique() {
        let all = all();
        let mut keys: Vec<_> = all.iter().map(|(key, _)| key.clone()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), all.len());
    }
}
