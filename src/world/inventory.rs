use indexmap::IndexMap;

use super::model::{Item, Weight};

/// Items keyed by name, kept in the order they arrived.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: IndexMap<String, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under the item's own name, handing back whatever was stored there.
    pub fn put(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.name.clone(), item)
    }

    pub fn remove(&mut self, name: &str) -> Option<Item> {
        self.items.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn total_weight(&self) -> Weight {
        self.items.values().map(|i| i.weight).sum()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Space-separated item names.
    pub fn short_description(&self) -> String {
        self.names().collect::<Vec<&str>>().join(" ")
    }

    /// Comma-separated item descriptions.
    pub fn long_description(&self) -> String {
        self.iter()
            .map(|i| i.description.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}
