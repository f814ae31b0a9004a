use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::inventory::Inventory;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Item weight in thousandths of a unit.
///
/// Carry checks compare sums against a cap, so weights are kept in fixed point
/// to make `0.25 + 0.1 + 0.75 + 0.5 + 0.2 + 0.2` land on exactly `2.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub const fn from_milli(milli: u32) -> Self {
        Weight(milli)
    }

    /// Converts a real weight; `None` for negative, non-finite or absurdly large values.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let milli = (value * 1000.0).round();
        if milli > u32::MAX as f64 {
            return None;
        }
        Some(Weight(milli as u32))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        *self = *self + rhs;
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Add::add)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac == 0 {
            return write!(f, "{whole}.0");
        }
        let frac = format!("{frac:03}");
        write!(f, "{whole}.{}", frac.trim_end_matches('0'))
    }
}

/// Something the player can carry. Never mutated once built; it only moves
/// between inventories.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub weight: Weight,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, weight: Weight) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
            weight,
        }
    }
}

/// Stable handle into the world's room arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub(crate) usize);

pub struct Exit {
    pub direction: String,
    pub target: RoomId,
}

pub struct Room {
    /// Identifier used by the world file and in diagnostics; never shown to the player.
    pub id: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    pub items: Inventory,
}

impl Room {
    pub fn new(id: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            desc: desc.into(),
            exits: Vec::new(),
            items: Inventory::new(),
        }
    }

    /// Exact-match lookup of a direction.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target)
    }

    /// Adds or redirects an exit. Redirecting keeps the exit's original position.
    pub fn set_exit(&mut self, direction: impl Into<String>, target: RoomId) {
        let direction = direction.into();
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.target = target,
            None => self.exits.push(Exit { direction, target }),
        }
    }

    pub fn exit_string(&self) -> String {
        if self.exits.is_empty() {
            return "Exits: (none)".to_string();
        }
        let dirs = self
            .exits
            .iter()
            .map(|e| e.direction.as_str())
            .collect::<Vec<&str>>()
            .join(" ");
        format!("Exits: {}", dirs)
    }
}

/// Tunable numbers of a level. The defaults are the house's.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub max_moves: u32,
    pub start_carry_weight: Weight,
    pub items_to_win: usize,
    pub edible: String,
    pub eat_bonus: Weight,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            max_moves: 15,
            start_carry_weight: Weight::from_milli(1000),
            items_to_win: 6,
            edible: "apple".to_string(),
            eat_bonus: Weight::from_milli(1000),
        }
    }
}

/// Runtime world: an arena of rooms plus the level's rules.
pub struct World {
    pub name: String,
    pub desc: String,
    pub rules: Rules,
    start: RoomId,
    rooms: Vec<Room>,
}

impl World {
    /// Creates a world whose first added room becomes the start room until
    /// [`World::set_start`] says otherwise.
    pub fn new(name: impl Into<String>, desc: impl Into<String>, rules: Rules) -> Self {
        World {
            name: name.into(),
            desc: desc.into(),
            rules,
            start: RoomId(0),
            rooms: Vec::new(),
        }
    }

    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    pub fn set_start(&mut self, room: RoomId) {
        self.start = room;
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn find_room(&self, id: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.id == id).map(RoomId)
    }

    pub fn get_exit(&self, room: RoomId, direction: &str) -> Option<RoomId> {
        self.room(room).exit(direction)
    }

    pub fn set_exit(&mut self, from: RoomId, direction: impl Into<String>, to: RoomId) {
        self.room_mut(from).set_exit(direction, to);
    }

    pub fn add_item(&mut self, room: RoomId, item: Item) {
        self.room_mut(room).items.put(item);
    }

    pub fn remove_item(&mut self, room: RoomId, name: &str) -> Option<Item> {
        self.room_mut(room).items.remove(name)
    }
}
