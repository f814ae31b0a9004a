use std::collections::{HashMap, VecDeque};

use super::model::{RoomId, World};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Checks a loaded world for problems that make it unpleasant or unwinnable
/// without making it unloadable.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.room_count() == 0 {
        errors.push(ValidationError::new("world has no rooms"));
        return errors;
    }

    // Every room should be reachable from the start
    let reachable = reachable_from(world, world.start());
    for (id, room) in world.rooms() {
        if !reachable[id.0] {
            errors.push(ValidationError::new(format!(
                "room '{}' cannot be reached from start room '{}'",
                room.id,
                world.room(world.start()).id
            )));
        }
    }

    // Item names are inventory keys, so two copies would collide once carried
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (_, room) in world.rooms() {
        for item in room.items.iter() {
            if let Some(first) = seen.insert(item.name.as_str(), room.id.as_str()) {
                errors.push(ValidationError::new(format!(
                    "item '{}' appears in both '{}' and '{}'",
                    item.name, first, room.id
                )));
            }
        }
    }

    let rules = &world.rules;
    if !seen.contains_key(rules.edible.as_str()) {
        errors.push(ValidationError::new(format!(
            "edible item '{}' is not placed anywhere",
            rules.edible
        )));
    }

    let collectable = seen
        .keys()
        .filter(|name| **name != rules.edible)
        .count();
    if collectable < rules.items_to_win {
        errors.push(ValidationError::new(format!(
            "only {} collectable items but {} are needed to win",
            collectable, rules.items_to_win
        )));
    }

    for (_, room) in world.rooms() {
        for exit in &room.exits {
            if exit.direction.contains(char::is_whitespace) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' contains whitespace and can never be typed",
                    room.id, exit.direction
                )));
            }
        }
    }

    errors
}

fn reachable_from(world: &World, start: RoomId) -> Vec<bool> {
    let mut seen = vec![false; world.room_count()];
    let mut queue = VecDeque::from([start]);
    seen[start.0] = true;

    while let Some(id) = queue.pop_front() {
        for exit in &world.room(id).exits {
            if !seen[exit.target.0] {
                seen[exit.target.0] = true;
                queue.push_back(exit.target);
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Item, Room, Rules, Weight, load_default_world};

    #[test]
    fn default_house_is_clean() {
        let world = load_default_world().unwrap();
        assert_eq!(validate_world(&world), Vec::new());
    }

    #[test]
    fn flags_unreachable_rooms_and_missing_items() {
        let mut world = World::new("t", "", Rules::default());
        let a = world.add_room(Room::new("a", "in a"));
        let b = world.add_room(Room::new("b", "in b"));
        // one-way: b -> a only
        world.set_exit(b, "west", a);
        world.add_item(a, Item::new("pen", "A black pen", Weight::from_milli(200)));
        world.add_item(b, Item::new("pen", "Another pen", Weight::from_milli(200)));

        let messages: Vec<String> = validate_world(&world)
            .into_iter()
            .map(|e| e.message)
            .collect();

        assert!(messages.iter().any(|m| m.contains("'b' cannot be reached")));
        assert!(messages.iter().any(|m| m.contains("'pen' appears in both")));
        assert!(messages.iter().any(|m| m.contains("edible item 'apple'")));
        assert!(messages.iter().any(|m| m.contains("are needed to win")));
    }

    #[test]
    fn flags_untypeable_direction() {
        let mut world = World::new("t", "", Rules::default());
        let a = world.add_room(Room::new("a", "in a"));
        world.set_exit(a, "go up", a);

        assert!(
            validate_world(&world)
                .iter()
                .any(|e| e.message.contains("can never be typed"))
        );
    }
}
