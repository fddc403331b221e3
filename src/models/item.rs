use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Food/drink tag on a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Food,
    Drink,
}

impl ItemKind {
    /// Parse a user-supplied kind ("food" / "drink"), ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("food") {
            Ok(ItemKind::Food)
        } else if trimmed.eq_ignore_ascii_case("drink") {
            Ok(ItemKind::Drink)
        } else {
            Err(MenuError::InvalidItemType(trimmed.to_string()))
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Food => "food",
            ItemKind::Drink => "drink",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A purchasable entry on the menu.
///
/// Items are immutable once built. Identity for lookup and removal is the
/// name compared case-insensitively; see [`MenuItem::matches`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: f64,
    kind: ItemKind,
}

impl MenuItem {
    /// Build an item, rejecting negative or non-finite prices.
    pub fn new(name: impl Into<String>, price: f64, kind: ItemKind) -> Result<Self> {
        if !is_valid_price(price) {
            return Err(MenuError::InvalidPrice(price.to_string()));
        }
        Ok(Self {
            name: name.into(),
            price,
            kind,
        })
    }

    pub fn food(name: impl Into<String>, price: f64) -> Result<Self> {
        Self::new(name, price, ItemKind::Food)
    }

    pub fn drink(name: impl Into<String>, price: f64) -> Result<Self> {
        Self::new(name, price, ItemKind::Drink)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace on
    /// both sides.
    pub fn matches(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    pub fn is_valid(&self) -> bool {
        is_valid_price(self.price)
    }
}

pub(crate) fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${:.2}", self.name, self.price)
    }
}
