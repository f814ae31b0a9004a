use crate::world::{Inventory, Item, RoomId, Rules, Weight, World};

/// Where a game stands after a turn. Derived from the player's numbers, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Dead,
    Won,
}

#[derive(Debug)]
pub struct Player {
    name: String,
    current_room: RoomId,
    last_room: RoomId,
    items: Inventory,
    max_weight: Weight,
    moves: u32,
    max_moves: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, start: RoomId, rules: &Rules) -> Self {
        Player {
            name: name.into(),
            current_room: start,
            last_room: start,
            items: Inventory::new(),
            max_weight: rules.start_carry_weight,
            moves: 0,
            max_moves: rules.max_moves,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn last_room(&self) -> RoomId {
        self.last_room
    }

    pub fn items(&self) -> &Inventory {
        &self.items
    }

    pub fn max_weight(&self) -> Weight {
        self.max_weight
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn carried_count(&self) -> usize {
        self.items.count()
    }

    /// Moves the player. Whether `room` is actually reachable is the caller's business.
    pub fn enter_room(&mut self, room: RoomId) {
        self.moves += 1;
        self.last_room = self.current_room;
        self.current_room = room;
    }

    /// True when the named item lies in the current room, fits under the cap,
    /// and would not displace a carried item of the same name.
    pub fn can_pick_item(&self, world: &World, name: &str) -> bool {
        if self.items.contains(name) {
            return false;
        }
        match world.room(self.current_room).items.get(name) {
            Some(item) => self.items.total_weight() + item.weight <= self.max_weight,
            None => false,
        }
    }

    /// Takes an item from the current room. `None` if it is not there or too heavy.
    pub fn pick_up_item(&mut self, world: &mut World, name: &str) -> Option<&Item> {
        if !self.can_pick_item(world, name) {
            return None;
        }
        let item = world.remove_item(self.current_room, name)?;
        self.items.put(item);
        self.items.get(name)
    }

    /// Puts a carried item down in the current room. Refused while the room
    /// already holds an item of that name.
    pub fn drop_item<'w>(&mut self, world: &'w mut World, name: &str) -> Option<&'w Item> {
        if world.room(self.current_room).items.contains(name) {
            return None;
        }
        let item = self.items.remove(name)?;
        world.add_item(self.current_room, item);
        world.room(self.current_room).items.get(name)
    }

    /// Eats the level's edible item, from the pack first and then from the
    /// floor. The item is gone afterwards and the carry cap grows for good.
    pub fn eat(&mut self, world: &mut World, name: &str) -> Option<Item> {
        let rules = &world.rules;
        if name != rules.edible {
            return None;
        }
        let bonus = rules.eat_bonus;

        let food = self
            .items
            .remove(name)
            .or_else(|| world.remove_item(self.current_room, name))?;
        self.max_weight += bonus;
        Some(food)
    }

    pub fn status(&self, rules: &Rules) -> Status {
        if self.moves > self.max_moves {
            Status::Dead
        } else if self.items.count() == rules.items_to_win {
            Status::Won
        } else {
            Status::Playing
        }
    }
}
