//! Core of Flint: entities and the damage type system.
//!
//! The [`damage`] module is the heart of this crate. Entities are modelled
//! only as far as damage resolution needs them.

pub mod config;
pub mod damage;
pub mod entity;
pub mod player;
