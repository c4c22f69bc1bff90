//! Core world model for Rove: locations, exits, and items.
//!
//! This crate defines the data the game engine drives. It is independent of
//! command handling — you can construct a [`World`] programmatically and
//! inspect it without ever starting a session.

/// Error types used throughout the crate.
pub mod error;
/// Item instances and their identifiers.
pub mod item;
/// Location nodes: descriptions, exits, and present items.
pub mod location;
/// The central world model that owns locations and items.
pub mod world;

/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item types.
pub use item::{Item, ItemId};
/// Re-export location types.
pub use location::{Location, LocationId};
/// Re-export world model types.
pub use world::{World, WorldMeta};
