//! Command parsing for player input.

/// A structured player command.
///
/// The first whitespace-separated word of the input selects the kind; the
/// remainder, if any, rides along as free text for the engine to validate
/// (a direction, an item name, or a step count). Arguments are optional at
/// this level — reporting a missing one is the engine's job, so all failure
/// paths stay uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit.
    Go {
        /// The direction to go.
        direction: Option<String>,
    },
    /// Describe the current location.
    Look,
    /// Pick up an item lying here.
    Take {
        /// The item's description.
        item: Option<String>,
    },
    /// Put a held item down here.
    Drop {
        /// The item's description.
        item: Option<String>,
    },
    /// Summarize what is carried.
    Inventory,
    /// Synonym of [`Command::Inventory`].
    Items,
    /// Consume a held item.
    Eat {
        /// The item's description.
        item: Option<String>,
    },
    /// Retrace previous moves.
    Back {
        /// How many steps, as raw text (defaults to one step when absent).
        steps: Option<String>,
    },
    /// List the command vocabulary.
    Help,
    /// End the session.
    Quit {
        /// Trailing text, which makes the quit ambiguous and is rejected.
        argument: Option<String>,
    },
    /// Anything unrecognized.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// The recognized command identifiers, in the order they are listed by
/// "help".
pub fn vocabulary() -> &'static [&'static str] {
    &[
        "go",
        "quit",
        "help",
        "look",
        "take",
        "drop",
        "inventory",
        "back",
        "items",
        "eat",
    ]
}

/// Parse one line of player input into a [`Command`].
///
/// The verb is matched case-insensitively; the rest of the line is passed
/// through untouched as the argument.
pub fn parse_command(input: &str) -> Command {
    let mut words = input.split_whitespace();
    let Some(verb) = words.next() else {
        return Command::Unknown {
            input: input.to_string(),
        };
    };

    let rest = words.collect::<Vec<&str>>().join(" ");
    let argument = (!rest.is_empty()).then_some(rest);

    match verb.to_lowercase().as_str() {
        "go" => Command::Go {
            direction: argument,
        },
        "look" => Command::Look,
        "take" => Command::Take { item: argument },
        "drop" => Command::Drop { item: argument },
        "inventory" => Command::Inventory,
        "items" => Command::Items,
        "eat" => Command::Eat { item: argument },
        "back" => Command::Back { steps: argument },
        "help" => Command::Help,
        "quit" => Command::Quit { argument },
        _ => Command::Unknown {
            input: input.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_map_to_kinds() {
        assert_eq!(
            parse_command("go east"),
            Command::Go {
                direction: Some("east".to_string())
            }
        );
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("items"), Command::Items);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit { argument: None });
    }

    #[test]
    fn verb_is_case_insensitive() {
        assert_eq!(
            parse_command("TAKE key"),
            Command::Take {
                item: Some("key".to_string())
            }
        );
    }

    #[test]
    fn missing_argument_is_none() {
        assert_eq!(parse_command("go"), Command::Go { direction: None });
        assert_eq!(parse_command("take"), Command::Take { item: None });
        assert_eq!(parse_command("back"), Command::Back { steps: None });
    }

    #[test]
    fn argument_keeps_remaining_words() {
        assert_eq!(
            parse_command("take magic cookie"),
            Command::Take {
                item: Some("magic cookie".to_string())
            }
        );
    }

    #[test]
    fn quit_keeps_trailing_argument() {
        assert_eq!(
            parse_command("quit now"),
            Command::Quit {
                argument: Some("now".to_string())
            }
        );
    }

    #[test]
    fn unrecognized_input_is_unknown() {
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
        assert_eq!(
            parse_command("   "),
            Command::Unknown {
                input: "   ".to_string()
            }
        );
    }

    #[test]
    fn vocabulary_lists_every_identifier() {
        let words = vocabulary();
        assert_eq!(words.len(), 10);
        assert!(words.contains(&"go"));
        assert!(words.contains(&"eat"));
    }
}
