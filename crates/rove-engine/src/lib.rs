//! Game engine for Rove: player state, command execution, and outcomes.
//!
//! A [`Session`] owns a [`rove_core::World`] and a [`PlayerState`] and turns
//! structured commands into state transitions. Every command resolves to an
//! [`Outcome`] — display text plus a terminate signal — and never to a fault:
//! all failure modes are recoverable and the session continues.

/// Session configuration: starting capacity and the edibility policy.
pub mod config;
/// Data-driven effects of consuming items.
pub mod effects;
/// Error types for the engine.
pub mod error;
/// The per-command result type.
pub mod outcome;
/// Command parsing and the recognized vocabulary.
pub mod parser;
/// Player state: inventory, capacity, and movement history.
pub mod player;
/// Interactive session management and command execution.
pub mod session;

pub use config::SessionConfig;
pub use effects::{ConsumeEffect, EffectTable};
pub use error::{EngineError, EngineResult};
pub use outcome::Outcome;
pub use parser::{Command, parse_command, vocabulary};
pub use player::PlayerState;
pub use session::Session;
