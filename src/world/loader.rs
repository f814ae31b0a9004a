use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::WorldError;
use super::model::{Item, Room, RoomId, Rules, Weight, World};

/// The house the game ships with.
pub const DEFAULT_WORLD: &str = include_str!("../../public/escape.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    rules: RulesConfig,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
#[serde(default)]
struct RulesConfig {
    max_moves: u32,
    start_carry_weight: f64,
    items_to_win: usize,
    edible: String,
    eat_bonus: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let rules = Rules::default();
        RulesConfig {
            max_moves: rules.max_moves,
            start_carry_weight: rules.start_carry_weight.as_f64(),
            items_to_win: rules.items_to_win,
            edible: rules.edible,
            eat_bonus: rules.eat_bonus.as_f64(),
        }
    }
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    desc: String,
    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    description: String,
    weight: f64,
    /// Id of the room the item starts in.
    room: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load the built-in house.
pub fn load_default_world() -> Result<World, WorldError> {
    load_world_from_str(DEFAULT_WORLD)
}

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_str(&contents)
}

/// Load a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.name.trim().is_empty() {
        return Err(WorldError::EmptyField("world.name".to_string()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::EmptyField("world.start_room".to_string()));
    }

    let rules = build_rules(world_file.rules)?;
    let mut world = World::new(
        world_file.world.name.trim(),
        normalize_multiline_desc(&world_file.world.desc),
        rules,
    );

    // Rooms first so exits can point forward.
    let mut ids: HashMap<String, RoomId> = HashMap::new();
    let mut pending_exits: Vec<(RoomId, Vec<ExitConfig>)> = Vec::new();

    for room_cfg in world_file.room {
        if room_cfg.id.trim().is_empty() {
            return Err(WorldError::EmptyField("room.id".to_string()));
        }
        if ids.contains_key(&room_cfg.id) {
            return Err(WorldError::DuplicateRoom(room_cfg.id));
        }

        let handle = world.add_room(Room::new(
            room_cfg.id.clone(),
            normalize_multiline_desc(&room_cfg.desc),
        ));
        ids.insert(room_cfg.id, handle);
        pending_exits.push((handle, room_cfg.exit));
    }

    for (from, exits) in pending_exits {
        for exit in exits {
            if exit.direction.trim().is_empty() {
                return Err(WorldError::EmptyField(format!(
                    "room '{}' exit direction",
                    world.room(from).id
                )));
            }
            let target = resolve_room(&ids, &exit.target, || {
                format!("room '{}' exit '{}'", world.room(from).id, exit.direction)
            })?;
            world.set_exit(from, exit.direction, target);
        }
    }

    let start = resolve_room(&ids, &world_file.world.start_room, || {
        "world.start_room".to_string()
    })?;
    world.set_start(start);

    // Item names key every inventory, so they must be unique across the world.
    let mut placed: HashMap<String, String> = HashMap::new();

    for ic in world_file.item {
        let name = ic.name.trim();
        if name.is_empty() {
            return Err(WorldError::EmptyField("item.name".to_string()));
        }

        let room = resolve_room(&ids, &ic.room, || format!("item '{}'", name))?;
        let weight = Weight::from_f64(ic.weight).ok_or_else(|| WorldError::InvalidWeight {
            context: format!("item '{}'", name),
            weight: ic.weight,
        })?;

        if let Some(first) = placed.insert(name.to_string(), ic.room.clone()) {
            return Err(WorldError::DuplicateItem {
                name: name.to_string(),
                first,
                second: ic.room,
            });
        }

        let description = if ic.description.trim().is_empty() {
            name.to_string()
        } else {
            normalize_multiline_desc(&ic.description)
        };
        world.add_item(room, Item::new(name, description, weight));
    }

    tracing::debug!(
        world = %world.name,
        rooms = world.room_count(),
        "world loaded"
    );

    Ok(world)
}

fn resolve_room(
    ids: &HashMap<String, RoomId>,
    id: &str,
    context: impl FnOnce() -> String,
) -> Result<RoomId, WorldError> {
    ids.get(id.trim())
        .copied()
        .ok_or_else(|| WorldError::UnknownRoom {
            context: context(),
            room: id.to_string(),
        })
}

fn build_rules(cfg: RulesConfig) -> Result<Rules, WorldError> {
    let weight = |field: &str, value: f64| {
        Weight::from_f64(value).ok_or_else(|| WorldError::InvalidWeight {
            context: format!("rules.{field}"),
            weight: value,
        })
    };

    if cfg.edible.trim().is_empty() {
        return Err(WorldError::EmptyField("rules.edible".to_string()));
    }

    Ok(Rules {
        max_moves: cfg.max_moves,
        start_carry_weight: weight("start_carry_weight", cfg.start_carry_weight)?,
        items_to_win: cfg.items_to_win,
        edible: cfg.edible.trim().to_string(),
        eat_bonus: weight("eat_bonus", cfg.eat_bonus)?,
    })
}

/// Folds TOML multi-line text into display text: wrapped lines join with a
/// space, one blank line becomes a line break, more become a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut blanks = 0usize;

    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            blanks += 1;
            continue;
        }

        if !result.is_empty() {
            result.push_str(match blanks {
                0 => " ",
                1 => "\n",
                _ => "\n\n",
            });
        }
        result.push_str(line);
        blanks = 0;
    }

    result
}
