use crate::engine::output::Output;
use crate::engine::parser::Command;
use crate::engine::player::Player;
use crate::engine::render::render_player;
use crate::world::World;

/// `go <direction>`: follow an exit of the current room, if there is one.
pub fn handle_go(out: &mut Output, world: &World, player: &mut Player, cmd: &Command) {
    let Some(direction) = cmd.argument() else {
        out.say("Go where?");
        return;
    };

    match world.get_exit(player.current_room(), direction) {
        Some(next) => {
            player.enter_room(next);
            tracing::debug!(
                direction,
                room = %world.room(next).id,
                moves = player.moves(),
                "player moved"
            );
            render_player(out, world, player);
        }
        None => out.say("There is no door!"),
    }
}

/// `back`: return to the previous room, passage or not. `back <anything>` does nothing.
pub fn handle_back(out: &mut Output, world: &World, player: &mut Player, cmd: &Command) {
    if cmd.has_argument() {
        tracing::debug!(argument = cmd.argument(), "back with an argument ignored");
        return;
    }

    let previous = player.last_room();
    player.enter_room(previous);
    tracing::debug!(
        room = %world.room(previous).id,
        moves = player.moves(),
        "player went back"
    );
    render_player(out, world, player);
}
