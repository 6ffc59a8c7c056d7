//! Shared fields for all living entities.
//!
//! Entities that implement `LivingEntity` embed this struct and expose it via
//! `LivingEntity::living_base()`, just like `EntityBase` is used for core
//! `Entity` fields.

use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::atomic::AtomicCell;

/// Default maximum health of a player.
pub const PLAYER_MAX_HEALTH: f32 = 20.0;

/// Common fields shared by all living entities.
pub struct LivingEntityBase {
    /// if the entity is dead or not.
    dead: AtomicBool,
    /// Current health. Never negative.
    health: AtomicCell<f32>,
    max_health: f32,
}

impl LivingEntityBase {
    /// Creates a new `LivingEntityBase` at full health.
    #[must_use]
    pub const fn new(max_health: f32) -> Self {
        Self {
            dead: AtomicBool::new(false),
            health: AtomicCell::new(max_health),
            max_health,
        }
    }

    /// Whether the entity has been killed.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead.load(Ordering::Relaxed)
    }

    /// Current health.
    #[inline]
    pub fn get_health(&self) -> f32 {
        self.health.load()
    }

    /// Sets health, clamped to `0..=max_health`.
    #[inline]
    pub fn set_health(&self, health: f32) {
        self.health.store(health.clamp(0.0, self.max_health));
    }

    /// Subtracts an already computed damage amount.
    ///
    /// Returns `true` if this call took the entity from alive to dead. Damage
    /// to an entity that is already dead is ignored, so are amounts that are
    /// NaN or infinite.
    pub fn apply_damage(&self, amount: f32) -> bool {
        if self.is_dead() {
            return false;
        }
        if !amount.is_finite() {
            log::warn!("Ignoring non-finite damage amount {amount}");
            return false;
        }
        self.set_health(self.get_health() - amount);

        if self.get_health() <= 0.0 {
            // Only the first caller to flip the flag reports the death.
            return !self.dead.swap(true, Ordering::Relaxed);
        }
        false
    }
}

impl Default for LivingEntityBase {
    fn default() -> Self {
        Self::new(PLAYER_MAX_HEALTH)
    }
}
