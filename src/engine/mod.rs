mod conditions;
mod items;
mod movement;
mod output;
mod parser;
mod player;
mod render;

pub use conditions::{Ending, evaluate_ending, render_ending};

pub use items::{handle_drop, handle_eat, handle_items, handle_take};

pub use movement::{handle_back, handle_go};
pub use output::{Output, OutputBlock};
pub use parser::{Command, CommandSource, LineReader, Script, UnknownVerb, Verb};
pub use player::{Player, Status};
pub use render::{render_carried, render_help, render_player, render_room, render_welcome};
