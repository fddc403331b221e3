use log::debug;
use strsim::jaro_winkler;

use crate::models::{ItemKind, MenuItem};

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The set of purchasable items, in insertion order.
///
/// Names are not unique: lookups return the first match and removal drops
/// every match.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Create a catalog holding exactly `items`.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Create the starting catalog: Burger, Pizza, Coke and Water.
    pub fn with_defaults() -> Self {
        Self::new(default_items())
    }

    /// Append an item. No duplicate check.
    pub fn add(&mut self, item: MenuItem) {
        debug!("catalog add: {} ({}, {:.2})", item.name(), item.kind(), item.price());
        self.items.push(item);
    }

    /// Remove every item whose name matches case-insensitively.
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(name));
        let removed = before - self.items.len();
        debug!("catalog remove '{}': {} match(es)", name, removed);
        removed
    }

    /// Items in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter()
    }

    /// First item (insertion order) whose name matches case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.matches(name))
    }

    /// Closest-named item above [`SUGGESTION_THRESHOLD`], for typo hints.
    pub fn suggest(&self, name: &str) -> Option<&MenuItem> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.items
            .iter()
            .map(|item| (item, jaro_winkler(&item.name().to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(item, _)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn default_items() -> Vec<MenuItem> {
    [
        ("Burger", 5.99, ItemKind::Food),
        ("Pizza", 8.99, ItemKind::Food),
        ("Coke", 1.99, ItemKind::Drink),
        ("Water", 0.99, ItemKind::Drink),
    ]
    .into_iter()
    .map(|(name, price, kind)| {
        MenuItem::new(name, price, kind).expect("default prices are non-negative literals")
    })
    .collect()
}
