//! Resolution of a single damage event into sounds and death messages.

use std::sync::Arc;

use flint_utils::{Message, SoundEvent};

use super::DamageType;
use crate::entity::{Entity, EntityLookup, LivingEntity};
use crate::player::Player;

/// Plays sounds to the observers of an entity.
pub trait SoundSink {
    /// Plays `sound` at the position of `source`.
    fn play_sound(&self, source: &dyn LivingEntity, sound: &SoundEvent);
}

/// Delivers chat and death-screen messages.
pub trait MessageSink {
    /// Sends `message` to every player except `except`.
    fn broadcast_except(&self, except: &dyn LivingEntity, message: &Message);

    /// Shows `message` on the death screen of `player`.
    fn send_death_screen(&self, player: &Player, message: &Message);
}

/// What happened when a victim died.
pub struct DeathReport {
    /// Network id of the victim.
    pub victim_id: i32,
    /// Identifier of the damage type that killed the victim.
    pub identifier: String,
    /// Message broadcast to other players, if any.
    pub death_message: Option<Message>,
    /// Text shown to the victim, if any. Only players have a death screen.
    pub death_screen_text: Option<Message>,
    /// Entity credited with the kill. `None` if there was no attacker or it
    /// no longer exists.
    pub killer: Option<Arc<dyn Entity>>,
    /// Entity that dealt the final blow, e.g. the projectile.
    pub direct_killer: Option<Arc<dyn Entity>>,
}

impl DeathReport {
    /// Name of the credited killer, if known.
    #[must_use]
    pub fn killer_name(&self) -> Option<&str> {
        self.killer.as_deref().map(Entity::name)
    }
}

/// A damage type applied to a victim.
///
/// All references are only valid for the duration of the event. The amount
/// is final: armor and the like have already been applied by the caller.
pub struct DamageEvent<'a> {
    /// The entity that was hurt.
    pub victim: &'a dyn LivingEntity,
    /// Why it was hurt.
    pub damage_type: &'a dyn DamageType,
    /// Health to subtract.
    pub amount: f32,
}

impl<'a> DamageEvent<'a> {
    /// Creates an event dealing `amount` of `damage_type` to `victim`.
    #[must_use]
    pub const fn new(
        victim: &'a dyn LivingEntity,
        damage_type: &'a dyn DamageType,
        amount: f32,
    ) -> Self {
        Self {
            victim,
            damage_type,
            amount,
        }
    }

    /// Subtracts the damage, plays the hurt sound and, if the victim died
    /// from this hit, resolves its death.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(victim = self.victim.id(), cause = self.damage_type.identifier(), amount = self.amount)
    )]
    pub fn apply(
        &self,
        sounds: &impl SoundSink,
        messages: &impl MessageSink,
        lookup: &impl EntityLookup,
    ) -> Option<DeathReport> {
        if self.victim.living_base().is_dead() {
            log::debug!("Ignoring damage to dead entity {}", self.victim.id());
            return None;
        }
        if !self.amount.is_finite() {
            log::warn!(
                "Ignoring damage of {} to entity {}",
                self.amount,
                self.victim.id()
            );
            return None;
        }

        let died = self.victim.living_base().apply_damage(self.amount);
        self.hurt(sounds);
        died.then(|| self.kill(messages, lookup))
    }

    /// Plays the hurt sound, if the damage type has one for this victim.
    pub fn hurt(&self, sounds: &impl SoundSink) -> Option<SoundEvent> {
        let sound = self.damage_type.sound(self.victim)?;
        sounds.play_sound(self.victim, &sound);
        Some(sound)
    }

    /// Resolves and delivers the death messages and works out who gets the
    /// kill.
    pub fn kill(&self, messages: &impl MessageSink, lookup: &impl EntityLookup) -> DeathReport {
        let player = self.victim.as_player();

        let death_message = self.damage_type.death_message(self.victim);
        let death_screen_text = player.and_then(|_| self.damage_type.death_screen_text(self.victim));

        // Only player deaths are announced.
        if let (Some(message), Some(_)) = (&death_message, player) {
            messages.broadcast_except(self.victim, message);
        }
        if let (Some(text), Some(player)) = (&death_screen_text, player) {
            messages.send_death_screen(player, text);
        }

        let killer = self
            .damage_type
            .causing_entity()
            .and_then(|entity| entity.resolve(lookup));
        let direct_killer = self
            .damage_type
            .direct_entity()
            .and_then(|entity| entity.resolve(lookup));

        log::info!(
            "{} died ({}), killer: {}",
            self.victim.name(),
            self.damage_type.identifier(),
            killer.as_deref().map_or("none", Entity::name)
        );

        DeathReport {
            victim_id: self.victim.id(),
            identifier: self.damage_type.identifier().to_owned(),
            death_message,
            death_screen_text,
            killer,
            direct_killer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::{from_entity, from_projectile, vanilla};
    use crate::entity::{EntityRef, EntityRegistry, Mob, Projectile};
    use flint_utils::locks::SyncMutex;
    use flint_utils::sound_events;

    #[derive(Default)]
    struct Recorder {
        sounds: SyncMutex<Vec<(i32, SoundEvent)>>,
        broadcasts: SyncMutex<Vec<(i32, Message)>>,
        death_screens: SyncMutex<Vec<(i32, Message)>>,
    }

    impl SoundSink for Recorder {
        fn play_sound(&self, source: &dyn LivingEntity, sound: &SoundEvent) {
            self.sounds.lock().push((source.id(), sound.clone()));
        }
    }

    impl MessageSink for Recorder {
        fn broadcast_except(&self, except: &dyn LivingEntity, message: &Message) {
            self.broadcasts.lock().push((except.id(), message.clone()));
        }

        fn send_death_screen(&self, player: &Player, message: &Message) {
            self.death_screens.lock().push((player.id, message.clone()));
        }
    }

    #[test]
    fn non_lethal_hit_only_plays_sound() {
        let registry = EntityRegistry::new();
        let recorder = Recorder::default();
        let player = Player::offline(1, "Steve");

        let report = DamageEvent::new(&player, &vanilla::ON_FIRE, 1.0).apply(
            &recorder,
            &recorder,
            &registry,
        );

        assert!(report.is_none());
        assert_eq!(
            *recorder.sounds.lock(),
            [(1, sound_events::ENTITY_PLAYER_HURT_ON_FIRE)]
        );
        assert!(recorder.broadcasts.lock().is_empty());
    }

    #[test]
    fn player_death_broadcasts_and_shows_death_screen() {
        let registry = EntityRegistry::new();
        let recorder = Recorder::default();
        let player = Player::offline(1, "Alex");

        let report = DamageEvent::new(&player, &vanilla::VOID, f32::MAX)
            .apply(&recorder, &recorder, &registry)
            .expect("lethal");

        assert_eq!(report.identifier, "attack.outOfWorld");
        assert!(report.killer.is_none());
        assert_eq!(
            *recorder.broadcasts.lock(),
            [(1, Message::translate("death.attack.outOfWorld").with_arg("Alex"))]
        );
        assert_eq!(
            *recorder.death_screens.lock(),
            [(1, Message::translate("death.attack.outOfWorld"))]
        );
    }

    #[test]
    fn mob_death_is_not_announced() {
        let registry = EntityRegistry::new();
        let recorder = Recorder::default();
        let zombie = Mob::new(1, "Zombie", 20.0);

        let report = DamageEvent::new(&zombie, &vanilla::GRAVITY, 50.0)
            .apply(&recorder, &recorder, &registry)
            .expect("lethal");

        assert!(report.death_message.is_some());
        assert!(report.death_screen_text.is_none());
        assert!(recorder.broadcasts.lock().is_empty());
        assert!(recorder.death_screens.lock().is_empty());
    }

    #[test]
    fn kill_credit_goes_to_live_attacker() {
        let registry = EntityRegistry::new();
        let recorder = Recorder::default();
        let zombie = Arc::new(Mob::new(registry.next_entity_id(), "Zombie", 20.0));
        registry.add(zombie.clone());
        let player = Player::offline(registry.next_entity_id(), "Alex");

        let damage = from_entity(zombie.as_ref());
        let report = DamageEvent::new(&player, &damage, 100.0)
            .apply(&recorder, &recorder, &registry)
            .expect("lethal");

        assert_eq!(report.killer_name(), Some("Zombie"));
    }

    #[test]
    fn removed_shooter_means_unknown_killer() {
        let registry = EntityRegistry::new();
        let recorder = Recorder::default();
        let skeleton = Arc::new(Mob::new(registry.next_entity_id(), "Skeleton", 20.0));
        let arrow = Arc::new(Projectile::new(registry.next_entity_id(), "Arrow"));
        registry.add(skeleton.clone());
        registry.add(arrow.clone());
        let player = Player::offline(registry.next_entity_id(), "Alex");

        let damage = from_projectile(
            Some(EntityRef::of(skeleton.as_ref())),
            Some(EntityRef::of(arrow.as_ref())),
        )
        .expect("projectile is present");
        registry.remove(skeleton.id());

        let report = DamageEvent::new(&player, &damage, 100.0)
            .apply(&recorder, &recorder, &registry)
            .expect("lethal");

        assert!(report.killer.is_none());
        assert_eq!(
            report.direct_killer.as_deref().map(Entity::name),
            Some("Arrow")
        );
    }

    #[test]
    fn dead_victims_ignore_further_damage() {
        let registry = EntityRegistry::new();
        let recorder = Recorder::default();
        let player = Player::offline(1, "Alex");

        assert!(
            DamageEvent::new(&player, &vanilla::GENERIC, 100.0)
                .apply(&recorder, &recorder, &registry)
                .is_some()
        );
        assert!(
            DamageEvent::new(&player, &vanilla::GENERIC, 100.0)
                .apply(&recorder, &recorder, &registry)
                .is_none()
        );
        assert_eq!(recorder.sounds.lock().len(), 1);
    }

    #[test]
    fn nan_damage_is_ignored() {
        let registry = EntityRegistry::new();
        let recorder = Recorder::default();
        let player = Player::offline(1, "Alex");

        assert!(
            DamageEvent::new(&player, &vanilla::GENERIC, f32::NAN)
                .apply(&recorder, &recorder, &registry)
                .is_none()
        );
        assert!(recorder.sounds.lock().is_empty());
        assert!(!player.living_base().is_dead());

        assert!(
            DamageEvent::new(&player, &vanilla::GENERIC, 100.0)
                .apply(&recorder, &recorder, &registry)
                .is_some()
        );
    }
}
