use crate::engine::output::Output;
use crate::engine::parser::Command;
use crate::engine::player::Player;
use crate::engine::render::render_carried;
use crate::world::World;

pub fn handle_take(out: &mut Output, world: &mut World, player: &mut Player, cmd: &Command) {
    let Some(name) = cmd.argument() else {
        out.say("What do you want to take?");
        return;
    };

    // Missing and too heavy look the same from here.
    match player.pick_up_item(world, name) {
        Some(item) => {
            out.say(format!("You picked up {}", item.description));
            tracing::debug!(
                item = name,
                carried = player.carried_count(),
                weight = %player.items().total_weight(),
                "item taken"
            );
        }
        None => {
            out.say(format!("You can't pick up the item: {}", name));
            out.say("You either don't have enough weight to carry it or you misspelt your input.");
        }
    }
}

pub fn handle_drop(out: &mut Output, world: &mut World, player: &mut Player, cmd: &Command) {
    let Some(name) = cmd.argument() else {
        out.say("What do you want to drop?");
        return;
    };

    match player.drop_item(world, name) {
        Some(item) => {
            out.say(format!("You dropped {}", item.description));
            tracing::debug!(item = name, "item dropped");
        }
        None if player.items().contains(name) => {
            out.say(format!("There is already a {} here.", name));
        }
        None => out.say(format!("You don't carry the item: {}", name)),
    }
}

pub fn handle_eat(out: &mut Output, world: &mut World, player: &mut Player, cmd: &Command) {
    let Some(name) = cmd.argument() else {
        out.say("What do you want to eat?");
        return;
    };

    match player.eat(world, name) {
        Some(food) => {
            out.event("The weight limit of the items you can carry has increased!");
            out.event(format!(
                "Thanks to {}, you can now carry the rest of the items!",
                food.description
            ));
            out.event("Hurry! The beast is close to you!");
            out.say(format!("You ate {}", food.description));
            tracing::debug!(item = name, max_weight = %player.max_weight(), "item eaten");
        }
        None => out.say(format!("You can't eat {}!", name)),
    }
}

/// `items`: list what the player carries.
pub fn handle_items(out: &mut Output, player: &Player) {
    render_carried(out, player);
}
