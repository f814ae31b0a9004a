use serde::Serialize;

use crate::engine::output::Output;
use crate::engine::player::{Player, Status};
use crate::world::Rules;

/// How a game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ending {
    Quit,
    Dead,
    Won,
}

/// Checked once after every turn. Death is looked at first, so at most one ending fires.
pub fn evaluate_ending(player: &Player, rules: &Rules) -> Option<Ending> {
    match player.status(rules) {
        Status::Playing => None,
        Status::Dead => Some(Ending::Dead),
        Status::Won => Some(Ending::Won),
    }
}

pub fn render_ending(out: &mut Output, ending: Ending, rules: &Rules) {
    match ending {
        Ending::Dead => {
            out.event("You were caught by the beast and lost the game.");
            out.event(format!(
                "You didn't collect all {} items in order to escape.",
                rules.items_to_win
            ));
        }
        Ending::Won => {
            out.event("You escaped the beast and won the game!");
            out.event("Congratulations!");
        }
        Ending::Quit => {}
    }
    out.say("Thank you for playing.  Good bye.");
}
