//! The built-in demo world: a small university campus.

use rove_core::{Item, Location, LocationId, World, WorldMeta, WorldResult};

/// Build the campus world. Returns the world and the starting location.
pub fn build() -> WorldResult<(World, LocationId)> {
    let meta = WorldMeta::new("the Lost Campus")
        .with_description("an incredibly ordinary university, easy to get lost in");
    let mut world = World::new(meta);

    let outside = world.add_location(Location::new(
        "outside the main entrance of the university",
    ));
    let theater = world.add_location(Location::new("in a lecture theater"));
    let pub_ = world.add_location(Location::new("in the campus pub"));
    let lab = world.add_location(Location::new("in a computing lab"));
    let office = world.add_location(Location::new("in the computing admin office"));
    let library = world.add_location(Location::new("in the university library"));
    let cafeteria = world.add_location(Location::new("in the student cafeteria"));
    let garden = world.add_location(Location::new("in the university garden"));
    let basement = world.add_location(Location::new("in the basement storage room"));

    world.set_exit(outside, "east", theater)?;
    world.set_exit(outside, "south", lab)?;
    world.set_exit(outside, "west", pub_)?;
    world.set_exit(outside, "north", garden)?;

    world.set_exit(theater, "west", outside)?;
    world.set_exit(theater, "south", library)?;

    world.set_exit(pub_, "east", outside)?;
    world.set_exit(pub_, "south", cafeteria)?;

    world.set_exit(lab, "north", outside)?;
    world.set_exit(lab, "east", office)?;
    world.set_exit(lab, "down", basement)?;

    world.set_exit(office, "west", lab)?;
    world.set_exit(office, "south", library)?;

    world.set_exit(library, "north", theater)?;
    world.set_exit(library, "west", office)?;
    world.set_exit(library, "south", cafeteria)?;

    world.set_exit(cafeteria, "north", pub_)?;
    world.set_exit(cafeteria, "east", library)?;

    world.set_exit(garden, "south", outside)?;

    world.set_exit(basement, "up", lab)?;

    world.place_item(outside, Item::new("map", 0.05))?;
    world.place_item(outside, Item::new("backpack", 0.5))?;

    world.place_item(theater, Item::new("notebook", 0.2))?;
    world.place_item(theater, Item::new("pen", 0.01))?;

    world.place_item(pub_, Item::new("key", 0.1))?;

    world.place_item(lab, Item::new("laptop", 2.5))?;
    world.place_item(lab, Item::new("mouse", 0.15))?;

    world.place_item(office, Item::new("stapler", 0.3))?;

    world.place_item(library, Item::new("book", 0.8))?;
    world.place_item(library, Item::new("bookmark", 0.005))?;

    world.place_item(cafeteria, Item::new("tray", 0.4))?;

    world.place_item(garden, Item::new("flower", 0.02))?;
    // The magic cookie: the stock effect table makes this one edible.
    world.place_item(garden, Item::new("cookie", 0.01))?;

    world.place_item(basement, Item::new("flashlight", 0.25))?;
    world.place_item(basement, Item::new("toolbox", 3.0))?;

    Ok((world, outside))
}
