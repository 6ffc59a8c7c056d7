//! Flint: loads the damage configuration and replays its scenario.

mod replay;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use flint_core::config::{ConfigOrigin, FlintConfig};
use flint_core::damage::DamageTypeRegistry;
use tracing_subscriber::EnvFilter;

use crate::replay::Replay;

const DEFAULT_CONFIG_PATH: &str = "flint.json5";

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Also installs the `log` bridge, the library crates log through `log`.
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Failed to install logger: {e}");
    }
}

fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let (config, origin) = FlintConfig::load_or_create(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    init_logging(&config.log_filter);
    match origin {
        ConfigOrigin::Created => log::info!("Wrote default config to {}", config_path.display()),
        ConfigOrigin::File => log::info!("Loaded config from {}", config_path.display()),
    }

    let mut damage_types = DamageTypeRegistry::new_vanilla();
    config
        .register_damage_types(&mut damage_types)
        .context("Invalid custom damage type")?;
    damage_types.freeze();
    log::info!("{} damage types registered", damage_types.len());

    let replay = Replay::spawn(&config.entities, &damage_types)?;
    let summary = replay.run(&config.replay)?;

    log::info!(
        "Replayed {} events, {} deaths",
        config.replay.len(),
        summary.deaths
    );
    for (killer, kills) in &summary.kills {
        log::info!("{killer}: {kills} kill(s)");
    }

    Ok(())
}
