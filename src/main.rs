use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use escape_beast::engine::{LineReader, Output};
use escape_beast::world::{self, World, WorldError};
use escape_beast::{DEFAULT_PLAYER_NAME, Game};

#[derive(Parser, Debug)]
#[command(name = "escape")]
#[command(version, about = "Escape the beast - find six items before it finds you", long_about = None)]
struct Args {
    /// World file to play instead of the built-in house
    world: Option<PathBuf>,

    /// Player name
    #[arg(short = 'u', long = "name", default_value = DEFAULT_PLAYER_NAME)]
    name: String,
}

fn flush_output(out: Output) {
    print!("{out}");
}

fn load(args: &Args) -> Result<World, WorldError> {
    match &args.world {
        Some(path) => {
            let w = world::load_world_from_file(path)?;
            println!("Using world file: {}", path.display());
            Ok(w)
        }
        None => world::load_default_world(),
    }
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let world = match load(&args) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    for problem in world::validate_world(&world) {
        tracing::warn!("world check: {}", problem.message);
    }

    let mut game = Game::new(world, args.name);
    let stdin = io::stdin();
    let mut commands = LineReader::new(stdin.lock(), io::stdout());

    let ending = game.run(&mut commands, flush_output)?;
    tracing::debug!(?ending, "session finished");

    Ok(ExitCode::SUCCESS)
}
