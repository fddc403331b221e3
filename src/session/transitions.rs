//! Pure decision logic for the interactive loop.
//!
//! Each function maps already-read input to the next step without touching
//! I/O, so the runner only has to print what comes back.

use crate::error::{MenuError, Result};
use crate::models::{ItemKind, MenuItem, Order};
use crate::state::Catalog;

/// Sentinel that ends an ordering flow.
pub const DONE_SENTINEL: &str = "done";

/// Loop states. `MainMenu` is initial and re-entered after every flow;
/// `Exit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    AddItem,
    RemoveItem,
    DisplayMenu,
    TakeOrder,
    Exit,
}

impl State {
    pub fn is_terminal(self) -> bool {
        self == State::Exit
    }
}

/// Map a main-menu choice (1-5) to the state it selects.
///
/// Anything else, including non-numeric input, is an invalid choice.
pub fn select(input: &str) -> Result<State> {
    let choice: i64 = input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidChoice(input.trim().to_string()))?;

    match choice {
        1 => Ok(State::AddItem),
        2 => Ok(State::RemoveItem),
        3 => Ok(State::DisplayMenu),
        4 => Ok(State::TakeOrder),
        5 => Ok(State::Exit),
        other => Err(MenuError::InvalidChoice(other.to_string())),
    }
}

/// Parse a price; must be a finite, non-negative number.
pub fn parse_price(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(MenuError::InvalidPrice(trimmed.to_string())),
    }
}

/// Build the item described by an add-item flow.
pub fn build_item(kind: &str, name: &str, price: f64) -> Result<MenuItem> {
    let kind = ItemKind::parse(kind)?;
    MenuItem::new(name.trim(), price, kind)
}

/// Outcome of one ordering prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderStep<'a> {
    /// The sentinel was entered.
    Done,
    /// The item was found and appended to the order.
    Added(&'a MenuItem),
    /// Nothing matched; carries the closest name, if any is close enough.
    NotFound { suggestion: Option<&'a MenuItem> },
}

/// Apply one ordering input: finish on the sentinel, otherwise look the
/// name up and append the first match.
pub fn order_step<'a>(catalog: &'a Catalog, order: &mut Order<'a>, input: &str) -> OrderStep<'a> {
    let name = input.trim();
    if name.eq_ignore_ascii_case(DONE_SENTINEL) {
        return OrderStep::Done;
    }

    match catalog.find_by_name(name) {
        Some(item) => {
            order.add_item(item);
            OrderStep::Added(item)
        }
        None => OrderStep::NotFound {
            suggestion: catalog.suggest(name),
        },
    }
}
