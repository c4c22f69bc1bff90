//! The per-command result type.

/// The engine's answer to one command: display text plus a signal telling
/// the driver loop whether the session is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for the presentation layer to display.
    pub text: String,
    /// Whether the session should end after this command.
    pub terminate: bool,
}

impl Outcome {
    /// An outcome after which the session continues.
    pub fn report(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminate: false,
        }
    }

    /// An outcome that ends the session.
    pub fn farewell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminate: true,
        }
    }
}
