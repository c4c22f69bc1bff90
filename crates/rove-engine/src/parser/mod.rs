//! Command parsing and the recognized vocabulary.

mod command;

pub use command::{Command, parse_command, vocabulary};
