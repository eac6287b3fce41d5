//! Deck system: placeable instances and the builder that stamps them.
//!
//! ## Key Types
//!
//! - `PlaceableInstance`: one independent card copy with its own
//!   transform and collision geometry
//! - `Orientation` / `Transform`: per-instance facing and scale
//! - `CollisionBox`: interaction geometry generated at build time
//! - `DeckBuilder`: templates -> instances, two per symbol

pub mod builder;
pub mod instance;

pub use builder::DeckBuilder;
pub use instance::{CollisionBox, Orientation, PlaceableInstance, Transform};
