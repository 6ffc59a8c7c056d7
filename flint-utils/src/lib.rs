//! Shared utilities for Flint: identifiers, sound events, templated text and
//! lock aliases.

mod identifier;
pub mod locks;
pub mod sound;
pub mod text;

pub use identifier::{Identifier, IdentifierError};
pub use sound::{SoundEvent, sound_events};
pub use text::{Message, Translations};
