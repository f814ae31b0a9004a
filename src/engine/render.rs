use crate::engine::output::Output;
use crate::engine::parser::Verb;
use crate::engine::player::Player;
use crate::world::{RoomId, World};

/// Room text, what lies around, and the way out.
pub fn render_room(out: &mut Output, world: &World, room_id: RoomId) {
    let room = world.room(room_id);

    out.say(format!("You are {}.", room.desc.trim()));

    if !room.items.is_empty() {
        out.say(format!("Items here: {}", room.items.short_description()));
        for item in room.items.iter() {
            out.say(format!("  {} (weight {})", item.description, item.weight));
        }
    }

    out.set_exits(room.exit_string());
}

pub fn render_carried(out: &mut Output, player: &Player) {
    if player.items().is_empty() {
        out.say("You are carrying: nothing");
    } else {
        out.say(format!(
            "You are carrying: {}",
            player.items().long_description()
        ));
    }
}

/// The room the player stands in followed by what they carry.
pub fn render_player(out: &mut Output, world: &World, player: &Player) {
    render_room(out, world, player.current_room());
    render_carried(out, player);
}

pub fn render_welcome(out: &mut Output, world: &World, player: &Player) {
    out.title(format!("Welcome to {}!", world.name));
    for line in world.desc.lines() {
        out.say(line);
    }
    render_player(out, world, player);
}

pub fn render_help(out: &mut Output) {
    out.say("You are lost. You are alone. You wander");
    out.say("around a haunted house, being chased by an unknown monster.");
    out.say("Your command words are:");
    let words = Verb::ALL
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<&str>>()
        .join(" ");
    out.say(format!("  {}", words));
}
