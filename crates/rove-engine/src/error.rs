//! Error types for the engine.
//!
//! Every variant is recoverable and renders as the text the player sees;
//! none of them ends the session. [`crate::Session::execute`] converts them
//! into continuing [`crate::Outcome`]s.

use thiserror::Error;

use rove_core::WorldError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Recoverable per-command failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The command needs a second word that wasn't given.
    #[error("{verb} {wanted}?")]
    MissingArgument {
        /// The verb as shown to the player, e.g. "Take".
        verb: &'static str,
        /// The question word, e.g. "what" or "where".
        wanted: &'static str,
    },

    /// The current location has no exit in the requested direction.
    #[error("There is no door!")]
    NoSuchExit,

    /// No item with that description lies in the current location.
    #[error("There is no {0} here.")]
    NotHere(String),

    /// No item with that description is in the inventory.
    #[error("You don't have a {0}.")]
    NotHeld(String),

    /// Taking the item would exceed the carrying capacity.
    #[error("The {item} is too heavy to carry.\nYou need {deficit:.2}kg more capacity.")]
    OverCapacity {
        /// The item's description.
        item: String,
        /// How far over capacity the take would land, in kilograms.
        deficit: f64,
    },

    /// The step-count argument to "back" is not a positive integer.
    #[error("'{0}' is not a positive number of steps.")]
    InvalidStepCount(String),

    /// The item is held but the edibility policy has no entry for it.
    #[error("You can't eat the {0}.")]
    NotEdible(String),

    /// The history stack ran out before the requested number of steps.
    ///
    /// The steps that did complete stay committed; only the report differs.
    #[error("{}", history_exhausted_text(.completed))]
    HistoryExhausted {
        /// How many steps back succeeded before the stack emptied.
        completed: usize,
    },

    /// "quit" was given a trailing argument.
    #[error("Quit what?")]
    TrailingArgument,

    /// A world-level failure surfaced through the engine.
    #[error("{0}")]
    World(#[from] WorldError),
}

impl EngineError {
    /// Shorthand for a missing second word, e.g. `missing("Take", "what")`.
    pub fn missing(verb: &'static str, wanted: &'static str) -> Self {
        Self::MissingArgument { verb, wanted }
    }
}

fn history_exhausted_text(completed: &usize) -> String {
    if *completed == 0 {
        "You can't go back any further.".to_string()
    } else {
        format!("You went back {completed} step(s), but can't go back any further.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_reads_as_question() {
        assert_eq!(EngineError::missing("Go", "where").to_string(), "Go where?");
        assert_eq!(EngineError::missing("Eat", "what").to_string(), "Eat what?");
    }

    #[test]
    fn history_exhausted_distinguishes_zero_steps() {
        assert_eq!(
            EngineError::HistoryExhausted { completed: 0 }.to_string(),
            "You can't go back any further."
        );
        assert_eq!(
            EngineError::HistoryExhausted { completed: 2 }.to_string(),
            "You went back 2 step(s), but can't go back any further."
        );
    }

    #[test]
    fn deficit_renders_with_two_decimals() {
        let err = EngineError::OverCapacity {
            item: "toolbox".to_string(),
            deficit: 3.05_f64 + 3.0 - 5.0,
        };
        assert!(err.to_string().contains("1.05kg more capacity"));
    }
}
