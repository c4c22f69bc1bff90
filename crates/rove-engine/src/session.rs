//! Interactive session management and command execution.

use std::fmt::Write as _;

use rove_core::{LocationId, World, WorldError};

use crate::config::SessionConfig;
use crate::effects::{ConsumeEffect, EffectTable};
use crate::error::{EngineError, EngineResult};
use crate::outcome::Outcome;
use crate::parser::{Command, parse_command, vocabulary};
use crate::player::PlayerState;

/// An interactive game session.
///
/// Owns the world and the player for its whole lifetime; one command runs to
/// completion before the next is accepted, so no locking is needed anywhere.
pub struct Session {
    world: World,
    player: PlayerState,
    effects: EffectTable,
}

impl Session {
    /// Create a session with the player standing at `start`.
    pub fn new(world: World, start: LocationId, config: SessionConfig) -> EngineResult<Self> {
        if world.location(start).is_none() {
            return Err(EngineError::World(WorldError::LocationNotFound(start)));
        }
        let player = PlayerState::new(start, config.capacity);
        Ok(Self {
            world,
            player,
            effects: config.effects,
        })
    }

    /// The world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Describe the current location (the opening banner uses this).
    pub fn look(&self) -> String {
        self.world
            .describe(self.player.location)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Parse one line of input and execute it.
    pub fn process(&mut self, input: &str) -> Outcome {
        self.execute(parse_command(input))
    }

    /// Execute a structured command.
    ///
    /// Never fails across this boundary: every failure mode renders as the
    /// text of a continuing outcome, and only an argument-free quit
    /// terminates.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let result = match command {
            Command::Go { direction } => self.do_go(direction.as_deref()),
            Command::Look => self.do_look(),
            Command::Take { item } => self.do_take(item.as_deref()),
            Command::Drop { item } => self.do_drop(item.as_deref()),
            Command::Inventory | Command::Items => Ok(self.do_inventory()),
            Command::Eat { item } => self.do_eat(item.as_deref()),
            Command::Back { steps } => self.do_back(steps.as_deref()),
            Command::Help => Ok(self.do_help()),
            Command::Quit { argument: None } => {
                return Outcome::farewell("Thank you for playing. Good bye.");
            }
            Command::Quit { argument: Some(_) } => Err(EngineError::TrailingArgument),
            Command::Unknown { .. } => Ok("I don't know what you mean...".to_string()),
        };

        match result {
            Ok(text) => Outcome::report(text),
            Err(error) => Outcome::report(error.to_string()),
        }
    }

    // -----------------------------------------------------------------------
    // Command handlers
    // -----------------------------------------------------------------------

    fn do_go(&mut self, direction: Option<&str>) -> EngineResult<String> {
        let direction = direction.ok_or_else(|| EngineError::missing("Go", "where"))?;
        let here = self.player.location;
        let destination = self
            .world
            .exit(here, direction)
            .ok_or(EngineError::NoSuchExit)?;

        self.player.record_visited(here);
        self.player.location = destination;
        Ok(self.world.describe(destination)?)
    }

    fn do_look(&self) -> EngineResult<String> {
        Ok(self.world.describe(self.player.location)?)
    }

    fn do_take(&mut self, item: Option<&str>) -> EngineResult<String> {
        let name = item.ok_or_else(|| EngineError::missing("Take", "what"))?;
        let here = self.player.location;
        let id = self
            .world
            .find_item_at(here, name)
            .ok_or_else(|| EngineError::NotHere(name.to_string()))?;

        if self.player.try_add(&self.world, id) {
            self.world.remove_item(here, id);
            Ok(format!("You picked up the {name}."))
        } else {
            let weight = self.world.item(id).map_or(0.0, |i| i.weight);
            let deficit = self.player.total_weight(&self.world) + weight - self.player.capacity();
            Err(EngineError::OverCapacity {
                item: name.to_string(),
                deficit,
            })
        }
    }

    fn do_drop(&mut self, item: Option<&str>) -> EngineResult<String> {
        let name = item.ok_or_else(|| EngineError::missing("Drop", "what"))?;
        let id = self
            .player
            .find_held(&self.world, name)
            .ok_or_else(|| EngineError::NotHeld(name.to_string()))?;

        self.player.remove(id);
        self.world.add_item(self.player.location, id)?;
        Ok(format!("You dropped the {name}."))
    }

    fn do_inventory(&self) -> String {
        if self.player.inventory().is_empty() {
            return "Your inventory is empty.".to_string();
        }

        let mut text = String::from("You are carrying:");
        for id in self.player.inventory() {
            if let Some(item) = self.world.item(*id) {
                let _ = write!(text, " {item}");
            }
        }
        let _ = write!(
            text,
            "\nTotal weight: {:.2}kg / {:.2}kg",
            self.player.total_weight(&self.world),
            self.player.capacity()
        );
        let _ = write!(
            text,
            "\nRemaining capacity: {:.2}kg",
            self.player.remaining_capacity(&self.world)
        );
        text
    }

    fn do_eat(&mut self, item: Option<&str>) -> EngineResult<String> {
        let name = item.ok_or_else(|| EngineError::missing("Eat", "what"))?;
        let id = self
            .player
            .find_held(&self.world, name)
            .ok_or_else(|| EngineError::NotHeld(name.to_string()))?;
        let description = self
            .world
            .item(id)
            .map_or_else(|| name.to_string(), |i| i.description.clone());

        match self.effects.effect_of(&description) {
            Some(ConsumeEffect::BoostCapacity(delta)) => {
                self.player.remove(id);
                self.world.discard_item(id);
                self.player.increase_capacity(delta);
                Ok(format!(
                    "You ate the {description} and feel stronger!\n\
                     Your carrying capacity is now {:.2}kg.",
                    self.player.capacity()
                ))
            }
            None => Err(EngineError::NotEdible(description)),
        }
    }

    fn do_back(&mut self, steps: Option<&str>) -> EngineResult<String> {
        let requested = match steps {
            None => 1,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| EngineError::InvalidStepCount(raw.to_string()))?,
        };

        // Steps that succeed stay committed even if the stack runs dry.
        for completed in 0..requested {
            match self.player.step_back() {
                Some(location) => self.player.location = location,
                None => return Err(EngineError::HistoryExhausted { completed }),
            }
        }

        let report = if requested == 1 {
            "You went back.".to_string()
        } else {
            format!("You went back {requested} step(s).")
        };
        Ok(format!(
            "{report}\n{}",
            self.world.describe(self.player.location)?
        ))
    }

    fn do_help(&self) -> String {
        format!(
            "You are lost. You are alone. You wander around at the university.\n\n\
             Your command words are:\n   {}",
            vocabulary().join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_core::{Item, Location, WorldMeta};

    fn campus() -> (World, LocationId) {
        let mut world = World::new(WorldMeta::new("Test Campus"));
        let outside = world.add_location(Location::new(
            "outside the main entrance of the university",
        ));
        let theater = world.add_location(Location::new("in a lecture theater"));
        let lab = world.add_location(Location::new("in a computing lab"));
        let pub_ = world.add_location(Location::new("in the campus pub"));
        let garden = world.add_location(Location::new("in the university garden"));

        world.set_exit(outside, "east", theater).unwrap();
        world.set_exit(outside, "south", lab).unwrap();
        world.set_exit(outside, "west", pub_).unwrap();
        world.set_exit(outside, "north", garden).unwrap();
        world.set_exit(theater, "west", outside).unwrap();
        world.set_exit(lab, "north", outside).unwrap();
        world.set_exit(pub_, "east", outside).unwrap();
        world.set_exit(garden, "south", outside).unwrap();

        world.place_item(outside, Item::new("map", 0.05)).unwrap();
        world
            .place_item(outside, Item::new("backpack", 0.5))
            .unwrap();
        world.place_item(lab, Item::new("laptop", 2.5)).unwrap();
        world.place_item(lab, Item::new("toolbox", 3.0)).unwrap();
        world.place_item(garden, Item::new("cookie", 0.01)).unwrap();

        (world, outside)
    }

    fn session() -> Session {
        let (world, start) = campus();
        Session::new(world, start, SessionConfig::default()).unwrap()
    }

    #[test]
    fn session_rejects_unknown_start() {
        let (world, _) = campus();
        let nowhere = LocationId::new();
        assert!(Session::new(world, nowhere, SessionConfig::default()).is_err());
    }

    #[test]
    fn move_east_then_back() {
        let mut session = session();

        let outcome = session.process("go east");
        assert!(outcome.text.contains("in a lecture theater"));
        assert!(!outcome.terminate);

        let outcome = session.process("back");
        assert!(outcome.text.contains("You went back."));
        assert!(outcome.text.contains("outside the main entrance"));
    }

    #[test]
    fn go_requires_a_direction() {
        let mut session = session();
        assert_eq!(session.process("go").text, "Go where?");
    }

    #[test]
    fn go_through_a_wall_changes_nothing() {
        let mut session = session();
        assert_eq!(session.process("go down").text, "There is no door!");
        assert!(session.look().contains("outside the main entrance"));
        assert!(!session.player().has_history());
    }

    #[test]
    fn capacity_scenario_reports_exact_deficit() {
        let mut session = session();

        assert!(session.process("take map").text.contains("picked up"));
        assert!(session.process("take backpack").text.contains("picked up"));
        session.process("go south");
        assert!(session.process("take laptop").text.contains("picked up"));

        let outcome = session.process("take toolbox");
        assert!(outcome.text.contains("The toolbox is too heavy to carry."));
        assert!(outcome.text.contains("You need 1.05kg more capacity."));

        // The failed take left the toolbox exactly where it was.
        let lab = session.player().location;
        assert!(session.world().find_item_at(lab, "toolbox").is_some());
        assert_eq!(session.player().inventory().len(), 3);
    }

    #[test]
    fn take_absent_item() {
        let mut session = session();
        assert_eq!(session.process("take piano").text, "There is no piano here.");
    }

    #[test]
    fn take_then_drop_moves_one_instance() {
        let mut session = session();
        let here = session.player().location;

        session.process("take map");
        assert!(session.world().find_item_at(here, "map").is_none());
        assert!(session.player().find_held(session.world(), "map").is_some());

        let outcome = session.process("drop map");
        assert_eq!(outcome.text, "You dropped the map.");
        assert!(session.world().find_item_at(here, "map").is_some());
        assert!(session.player().find_held(session.world(), "map").is_none());
    }

    #[test]
    fn drop_something_not_held() {
        let mut session = session();
        assert_eq!(session.process("drop piano").text, "You don't have a piano.");
    }

    #[test]
    fn inventory_and_items_are_synonyms() {
        let mut session = session();
        session.process("take map");

        let inventory = session.process("inventory").text;
        let items = session.process("items").text;
        assert_eq!(inventory, items);
        assert!(inventory.contains("map (weight: 0.05kg)"));
        assert!(inventory.contains("Total weight: 0.05kg / 5.00kg"));
        assert!(inventory.contains("Remaining capacity: 4.95kg"));
    }

    #[test]
    fn empty_inventory_summary() {
        let mut session = session();
        assert_eq!(session.process("inventory").text, "Your inventory is empty.");
    }

    #[test]
    fn eating_the_cookie_boosts_capacity_once() {
        let mut session = session();
        session.process("go north");
        session.process("take cookie");
        let before = session.world().item_count();

        let outcome = session.process("eat cookie");
        assert!(outcome.text.contains("feel stronger"));
        assert!(outcome.text.contains("7.00kg"));
        assert_eq!(session.player().capacity(), 7.0);
        assert_eq!(session.world().item_count(), before - 1);

        // The instance is gone; a second eat finds nothing in hand.
        assert_eq!(session.process("eat cookie").text, "You don't have a cookie.");
        assert_eq!(session.player().capacity(), 7.0);
    }

    #[test]
    fn eating_an_ordinary_item_changes_nothing() {
        let mut session = session();
        session.process("take map");

        assert_eq!(session.process("eat map").text, "You can't eat the map.");
        assert_eq!(session.player().capacity(), 5.0);
        assert!(session.player().find_held(session.world(), "map").is_some());
    }

    #[test]
    fn back_with_no_history() {
        let mut session = session();
        assert_eq!(session.process("back").text, "You can't go back any further.");
    }

    #[test]
    fn back_three_with_one_entry_is_partial() {
        let mut session = session();
        session.process("go east");

        let outcome = session.process("back 3");
        assert_eq!(
            outcome.text,
            "You went back 1 step(s), but can't go back any further."
        );
        assert!(session.look().contains("outside the main entrance"));
    }

    #[test]
    fn back_two_retraces_two_moves() {
        let mut session = session();
        session.process("go east");
        session.process("go west");

        let outcome = session.process("back 2");
        assert!(outcome.text.contains("You went back 2 step(s)."));
        assert!(outcome.text.contains("outside the main entrance"));
        assert!(!session.player().has_history());
    }

    #[test]
    fn back_with_invalid_count_changes_nothing() {
        let mut session = session();
        session.process("go east");

        for input in ["back two", "back 0", "back -1"] {
            let outcome = session.process(input);
            assert!(outcome.text.contains("is not a positive number of steps."));
        }

        // History is intact, so a plain back still works.
        assert!(session.process("back").text.contains("You went back."));
    }

    #[test]
    fn quit_with_trailing_argument_does_not_terminate() {
        let mut session = session();
        let outcome = session.process("quit now");
        assert_eq!(outcome.text, "Quit what?");
        assert!(!outcome.terminate);
    }

    #[test]
    fn bare_quit_terminates() {
        let mut session = session();
        let outcome = session.process("quit");
        assert!(outcome.terminate);
        assert!(outcome.text.contains("Good bye"));
    }

    #[test]
    fn unknown_input_is_reported() {
        let mut session = session();
        let outcome = session.process("dance");
        assert_eq!(outcome.text, "I don't know what you mean...");
        assert!(!outcome.terminate);
    }

    #[test]
    fn help_lists_the_vocabulary() {
        let mut session = session();
        let text = session.process("help").text;
        assert!(text.contains("You are lost. You are alone. You wander around at the university."));
        for word in vocabulary() {
            assert!(text.contains(word));
        }
    }
}
