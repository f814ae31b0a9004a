pub mod engine;
pub mod world;

use std::io;

use engine::{
    Command, CommandSource, Ending, Output, Player, Verb, evaluate_ending, handle_back,
    handle_drop, handle_eat, handle_go, handle_items, handle_take, render_ending, render_help,
    render_room, render_welcome,
};
use world::World;

pub use world::{load_default_world, load_world_from_file, load_world_from_str};

pub const DEFAULT_PLAYER_NAME: &str = "Player_1";

/// One game in progress: the house, the player in it, and how it ended (if it has).
pub struct Game {
    pub world: World,
    pub player: Player,
    ending: Option<Ending>,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        ending: Option<Ending>,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        game: Game,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a game from a TOML world string, or the built-in house when empty.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world = if world_toml.trim().is_empty() {
                load_default_world()
            } else {
                load_world_from_str(world_toml)
            }
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

            Ok(WasmGame {
                game: Game::new(world, DEFAULT_PLAYER_NAME),
            })
        }

        /// The opening banner and first room.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.game.welcome().blocks,
                ending: None,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Play one line of input.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, ending) = self.game.step_line(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                ending,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Game {
    pub fn new(world: World, player_name: impl Into<String>) -> Self {
        let player = Player::new(player_name, world.start(), &world.rules);
        Game {
            world,
            player,
            ending: None,
        }
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn welcome(&self) -> Output {
        let mut out = Output::new();
        render_welcome(&mut out, &self.world, &self.player);
        out
    }

    pub fn step_line(&mut self, input: &str) -> (Output, Option<Ending>) {
        self.step(&Command::parse(input))
    }

    /// Plays one command and reports whether the game is now over.
    /// Once over, further commands produce nothing.
    pub fn step(&mut self, cmd: &Command) -> (Output, Option<Ending>) {
        let mut out = Output::new();
        if self.ending.is_some() {
            return (out, self.ending);
        }

        let mut quit = false;

        match cmd.verb() {
            None => out.say("I don't know what you mean..."),
            Some(Verb::Help) => render_help(&mut out),
            Some(Verb::Go) => handle_go(&mut out, &self.world, &mut self.player, cmd),
            Some(Verb::Back) => handle_back(&mut out, &self.world, &mut self.player, cmd),
            Some(Verb::Look) => render_room(&mut out, &self.world, self.player.current_room()),
            Some(Verb::Take) => handle_take(&mut out, &mut self.world, &mut self.player, cmd),
            Some(Verb::Drop) => handle_drop(&mut out, &mut self.world, &mut self.player, cmd),
            Some(Verb::Eat) => handle_eat(&mut out, &mut self.world, &mut self.player, cmd),
            Some(Verb::Items) => handle_items(&mut out, &self.player),
            Some(Verb::Quit) => {
                if cmd.has_argument() {
                    out.say("Quit what?");
                } else {
                    quit = true;
                }
            }
        }

        let ending = if quit {
            Some(Ending::Quit)
        } else {
            evaluate_ending(&self.player, &self.world.rules)
        };

        if let Some(ending) = ending {
            self.finish(&mut out, ending);
        }

        (out, ending)
    }

    /// Runs until the game ends or `source` runs dry, which counts as quitting.
    pub fn run<S: CommandSource>(
        &mut self,
        source: &mut S,
        mut sink: impl FnMut(Output),
    ) -> io::Result<Ending> {
        sink(self.welcome());

        loop {
            let Some(cmd) = source.next_command()? else {
                let mut out = Output::new();
                self.finish(&mut out, Ending::Quit);
                sink(out);
                return Ok(Ending::Quit);
            };

            let (out, ending) = self.step(&cmd);
            sink(out);
            if let Some(ending) = ending {
                return Ok(ending);
            }
        }
    }

    fn finish(&mut self, out: &mut Output, ending: Ending) {
        tracing::info!(
            player = self.player.name(),
            ?ending,
            moves = self.player.moves(),
            carried = self.player.carried_count(),
            "game over"
        );
        render_ending(out, ending, &self.world.rules);
        self.ending = Some(ending);
    }
}
