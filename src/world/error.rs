use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a world file cannot be turned into a playable world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("could not read world file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed world file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} may not be empty")]
    EmptyField(String),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    #[error("item '{name}' is placed in both '{first}' and '{second}'")]
    DuplicateItem {
        name: String,
        first: String,
        second: String,
    },

    #[error("{context} references unknown room '{room}'")]
    UnknownRoom { context: String, room: String },

    #[error("{context} has invalid weight {weight}")]
    InvalidWeight { context: String, weight: f64 },
}
