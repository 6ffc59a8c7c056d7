//! Players, the only entities that see a death screen.

use uuid::Uuid;

use crate::entity::{Entity, EntityBase, LivingEntity, LivingEntityBase, PLAYER_MAX_HEALTH};

/// The account behind a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    /// Account id.
    pub id: Uuid,
    /// Username, also used as display name.
    pub name: String,
}

/// A connected player.
pub struct Player {
    /// Network id of the player entity.
    pub id: i32,
    /// The player's account.
    pub gameprofile: GameProfile,
    base: EntityBase,
    living: LivingEntityBase,
}

impl Player {
    /// Creates a player at full health.
    #[must_use]
    pub fn new(id: i32, gameprofile: GameProfile) -> Self {
        Self {
            id,
            base: EntityBase::new(id, gameprofile.id),
            living: LivingEntityBase::new(PLAYER_MAX_HEALTH),
            gameprofile,
        }
    }

    /// Creates a player with a random account id. Handy for offline mode.
    #[must_use]
    pub fn offline(id: i32, name: impl Into<String>) -> Self {
        Self::new(
            id,
            GameProfile {
                id: Uuid::new_v4(),
                name: name.into(),
            },
        )
    }
}

impl Entity for Player {
    fn entity_base(&self) -> &EntityBase {
        &self.base
    }

    fn name(&self) -> &str {
        &self.gameprofile.name
    }

    fn as_living(&self) -> Option<&dyn LivingEntity> {
        Some(self)
    }
}

impl LivingEntity for Player {
    fn living_base(&self) -> &LivingEntityBase {
        &self.living
    }

    fn as_player(&self) -> Option<&Player> {
        Some(self)
    }
}
