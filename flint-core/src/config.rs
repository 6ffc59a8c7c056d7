//! Server configuration, stored as JSON5.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use flint_utils::{Identifier, SoundEvent};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::damage::{CustomDamage, Data, DamageError, DamageType, DamageTypeRegistry};

/// Errors raised while loading the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON5 or does not match the schema.
    #[error("Config is malformed: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The default config could not be serialized.
    #[error("Could not serialize default config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Where a loaded config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing file.
    File,
    /// The file did not exist, the defaults were written to it.
    Created,
}

/// Top level config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlintConfig {
    /// `tracing` env-filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Extra damage types to register next to the vanilla ones.
    pub damage_types: Vec<CustomDamageConfig>,
    /// Entities spawned for the replay.
    pub entities: Vec<EntityConfig>,
    /// Damage events replayed in order at startup.
    pub replay: Vec<ReplayEvent>,
}

impl Default for FlintConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_owned(),
            damage_types: Vec::new(),
            entities: Vec::new(),
            replay: Vec::new(),
        }
    }
}

impl FlintConfig {
    /// Loads the config at `path`, writing the defaults there first if the
    /// file does not exist yet.
    ///
    /// Runs before logging is set up, so callers report the origin.
    pub fn load_or_create(path: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        if !path.exists() {
            let config = Self::default();
            fs::write(path, serde_json::to_string_pretty(&config)?)?;
            return Ok((config, ConfigOrigin::Created));
        }
        Ok((Self::parse(&fs::read_to_string(path)?)?, ConfigOrigin::File))
    }

    /// Parses a config from JSON5 text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json5::from_str(text)?)
    }

    /// Registers every configured damage type.
    pub fn register_damage_types(
        &self,
        registry: &mut DamageTypeRegistry,
    ) -> Result<(), DamageError> {
        for definition in &self.damage_types {
            registry.register(definition.key.clone(), Arc::new(definition.build()))?;
        }
        Ok(())
    }
}

/// What sound a custom damage type plays: a sound key, or `"none"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SoundSetting {
    /// No sound at all.
    Silent,
    /// A specific sound.
    Play(SoundEvent),
}

impl TryFrom<String> for SoundSetting {
    type Error = flint_utils::IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "none" {
            return Ok(Self::Silent);
        }
        Ok(Self::Play(SoundEvent::new(value.parse::<Identifier>()?)))
    }
}

impl From<SoundSetting> for String {
    fn from(value: SoundSetting) -> Self {
        match value {
            SoundSetting::Silent => "none".to_owned(),
            SoundSetting::Play(sound) => sound.to_string(),
        }
    }
}

impl SoundSetting {
    fn into_sound(self) -> Option<SoundEvent> {
        match self {
            Self::Silent => None,
            Self::Play(sound) => Some(sound),
        }
    }
}

const fn announce_by_default() -> bool {
    true
}

/// A damage type defined in the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDamageConfig {
    /// Registry key, must be unique.
    pub key: Identifier,
    /// Templating identifier, may be shared with other damage types.
    pub identifier: String,
    /// Hurt sound for non-player victims. Stock sound if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_sound: Option<SoundSetting>,
    /// Hurt sound for players. Stock sound if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_sound: Option<SoundSetting>,
    /// Whether deaths are broadcast.
    #[serde(default = "announce_by_default")]
    pub announce_death: bool,
    /// Side data attached to the damage type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
}

impl CustomDamageConfig {
    /// Builds the damage type described by this entry.
    #[must_use]
    pub fn build(&self) -> CustomDamage {
        let mut damage =
            CustomDamage::new(self.identifier.clone()).with_announced_death(self.announce_death);
        if let Some(sound) = &self.generic_sound {
            damage = damage.with_generic_sound(sound.clone().into_sound());
        }
        if let Some(sound) = &self.player_sound {
            damage = damage.with_player_sound(sound.clone().into_sound());
        }
        if self.data.is_some() {
            damage.set_data(self.data.clone());
        }
        damage
    }
}

/// Kind of a configured entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// An offline-mode player.
    Player,
    /// A non-player living entity.
    Mob,
    /// A projectile.
    Projectile,
}

/// An entity spawned for the replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Display name, also used to refer to the entity in replay events.
    pub name: String,
    /// What to spawn.
    pub kind: EntityKind,
    /// Maximum health of a mob. Ignored for other kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_health: Option<f32>,
}

/// Why a replayed victim is hurt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CauseConfig {
    /// A registered damage type.
    Registered {
        /// Registry key.
        key: Identifier,
    },
    /// A direct hit by another entity.
    Entity {
        /// Name of the attacker.
        attacker: String,
    },
    /// A projectile hit.
    Projectile {
        /// Name of the shooter, if any.
        #[serde(default)]
        shooter: Option<String>,
        /// Name of the projectile.
        projectile: String,
    },
    /// Removes an entity from the world instead of hurting anything.
    Despawn,
}

/// One replayed damage event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayEvent {
    /// Name of the victim, or of the entity to remove for
    /// [`CauseConfig::Despawn`].
    pub victim: String,
    /// What hurts the victim.
    pub cause: CauseConfig,
    /// Final damage amount.
    #[serde(default)]
    pub amount: f32,
}
