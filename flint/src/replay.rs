//! Replays configured damage events against a throwaway world.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use flint_core::config::{CauseConfig, EntityConfig, EntityKind, ReplayEvent};
use flint_core::damage::{
    self, DamageEvent, DamageType, DamageTypeRegistry, MessageSink, SoundSink,
};
use flint_core::entity::{Entity, EntityRef, EntityRegistry, LivingEntity, Mob, Projectile};
use flint_core::player::Player;
use flint_utils::{Message, SoundEvent, Translations};
use rustc_hash::FxHashMap;

const DEFAULT_MOB_HEALTH: f32 = 20.0;

/// Sinks that log what players would see and hear.
struct LogSink;

impl SoundSink for LogSink {
    fn play_sound(&self, source: &dyn LivingEntity, sound: &SoundEvent) {
        tracing::debug!(entity = source.name(), %sound, "Play sound");
    }
}

impl MessageSink for LogSink {
    fn broadcast_except(&self, _except: &dyn LivingEntity, message: &Message) {
        tracing::info!("[chat] {}", Translations::english().render(message));
    }

    fn send_death_screen(&self, player: &Player, message: &Message) {
        tracing::info!(
            "[death screen of {}] {}",
            player.gameprofile.name,
            Translations::english().render(message)
        );
    }
}

/// Totals gathered over a replay.
#[derive(Debug, Default)]
pub struct ReplaySummary {
    /// Number of events that killed their victim.
    pub deaths: usize,
    /// Kills credited per killer name.
    pub kills: FxHashMap<String, u32>,
}

/// A world populated from the config.
pub struct Replay<'a> {
    entities: EntityRegistry,
    by_name: FxHashMap<String, Arc<dyn Entity>>,
    damage_types: &'a DamageTypeRegistry,
}

impl<'a> Replay<'a> {
    /// Spawns the configured entities.
    pub fn spawn(config: &[EntityConfig], damage_types: &'a DamageTypeRegistry) -> Result<Self> {
        let entities = EntityRegistry::new();
        let mut by_name: FxHashMap<String, Arc<dyn Entity>> = FxHashMap::default();

        for entity in config {
            let id = entities.next_entity_id();
            let spawned: Arc<dyn Entity> = match entity.kind {
                EntityKind::Player => Arc::new(Player::offline(id, entity.name.clone())),
                EntityKind::Mob => Arc::new(Mob::new(
                    id,
                    entity.name.clone(),
                    entity.max_health.unwrap_or(DEFAULT_MOB_HEALTH),
                )),
                EntityKind::Projectile => Arc::new(Projectile::new(id, entity.name.clone())),
            };
            if by_name.insert(entity.name.clone(), spawned.clone()).is_some() {
                bail!("Entity name `{}` is used twice", entity.name);
            }
            entities.add(spawned);
        }

        log::info!("Spawned {} entities", entities.len());
        Ok(Self {
            entities,
            by_name,
            damage_types,
        })
    }

    fn named(&self, name: &str) -> Result<&Arc<dyn Entity>> {
        self.by_name
            .get(name)
            .ok_or_else(|| anyhow!("Unknown entity `{name}`"))
    }

    fn reference(&self, name: &str) -> Result<EntityRef> {
        Ok(EntityRef::of(self.named(name)?.as_ref()))
    }

    /// Runs every event in order.
    pub fn run(&self, events: &[ReplayEvent]) -> Result<ReplaySummary> {
        let mut summary = ReplaySummary::default();
        for (index, event) in events.iter().enumerate() {
            self.run_event(event, &mut summary)
                .with_context(|| format!("Replay event #{index} failed"))?;
        }
        Ok(summary)
    }

    fn run_event(&self, event: &ReplayEvent, summary: &mut ReplaySummary) -> Result<()> {
        let damage_type: Box<dyn DamageType> = match &event.cause {
            CauseConfig::Despawn => {
                let id = self.named(&event.victim)?.id();
                self.entities.remove(id);
                return Ok(());
            }
            CauseConfig::Registered { key } => {
                let registered = self
                    .damage_types
                    .by_key(key)
                    .ok_or_else(|| anyhow!("Unknown damage type `{key}`"))?;
                return self.hurt(&event.victim, &**registered, event.amount, summary);
            }
            CauseConfig::Entity { attacker } => {
                Box::new(damage::from_entity(self.named(attacker)?.as_ref()))
            }
            CauseConfig::Projectile {
                shooter,
                projectile,
            } => {
                let shooter = shooter
                    .as_deref()
                    .map(|name| self.reference(name))
                    .transpose()?;
                Box::new(damage::from_projectile(
                    shooter,
                    Some(self.reference(projectile)?),
                )?)
            }
        };
        self.hurt(&event.victim, damage_type.as_ref(), event.amount, summary)
    }

    fn hurt(
        &self,
        victim: &str,
        damage_type: &dyn DamageType,
        amount: f32,
        summary: &mut ReplaySummary,
    ) -> Result<()> {
        let victim = self.named(victim)?;
        let living = victim
            .as_living()
            .ok_or_else(|| anyhow!("`{}` cannot be hurt", victim.name()))?;

        if let Some(report) =
            DamageEvent::new(living, damage_type, amount).apply(&LogSink, &LogSink, &self.entities)
        {
            summary.deaths += 1;
            if let Some(killer) = report.killer_name() {
                *summary.kills.entry(killer.to_owned()).or_default() += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flint_core::config::FlintConfig;

    fn load(text: &str) -> (FlintConfig, DamageTypeRegistry) {
        let config = FlintConfig::parse(text).expect("valid config");
        let mut damage_types = DamageTypeRegistry::new_vanilla();
        config
            .register_damage_types(&mut damage_types)
            .expect("unique keys");
        (config, damage_types)
    }

    #[test]
    fn example_config_replays() {
        let (config, damage_types) = load(include_str!("../flint.example.json5"));
        let replay = Replay::spawn(&config.entities, &damage_types).expect("unique names");
        let summary = replay.run(&config.replay).expect("valid events");

        // Alex to Steve, the skeleton to acid, Steve to the void.
        assert_eq!(summary.deaths, 3);
        assert_eq!(summary.kills.get("Steve"), Some(&1));
        assert_eq!(summary.kills.len(), 1);
    }

    #[test]
    fn unknown_entity_fails() {
        let (config, damage_types) = load(
            r#"{ replay: [{ victim: "Nobody", cause: { type: "registered", key: "fall" }, amount: 1 }] }"#,
        );
        let replay = Replay::spawn(&config.entities, &damage_types).expect("no entities");
        assert!(replay.run(&config.replay).is_err());
    }

    #[test]
    fn projectiles_cannot_be_hurt() {
        let (config, damage_types) = load(
            r#"{
                entities: [{ name: "Arrow", kind: "projectile" }],
                replay: [{ victim: "Arrow", cause: { type: "registered", key: "lava" }, amount: 1 }],
            }"#,
        );
        let replay = Replay::spawn(&config.entities, &damage_types).expect("unique names");
        assert!(replay.run(&config.replay).is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let (config, damage_types) = load(
            r#"{ entities: [{ name: "Alex", kind: "player" }, { name: "Alex", kind: "mob" }] }"#,
        );
        assert!(Replay::spawn(&config.entities, &damage_types).is_err());
    }
}
