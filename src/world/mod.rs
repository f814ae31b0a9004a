mod error;
mod inventory;
mod loader;
mod model;
mod validator;

pub use error::WorldError;
pub use inventory::Inventory;
pub use loader::{DEFAULT_WORLD, load_default_world, load_world_from_file, load_world_from_str};
pub use model::{Exit, Item, Room, RoomId, Rules, Weight, World};
pub use validator::{ValidationError, validate_world};
