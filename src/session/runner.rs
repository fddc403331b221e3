use log::{debug, info, warn};

use crate::error::Result;
use crate::interface::{render, Console};
use crate::models::Order;
use crate::session::transitions::{self, OrderStep, State};
use crate::state::Catalog;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const TYPE_PROMPT: &str = "Enter item type (food/drink): ";
pub const NAME_PROMPT: &str = "Enter item name: ";
pub const PRICE_PROMPT: &str = "Enter item price: ";
pub const REMOVE_PROMPT: &str = "Enter the name of the item to remove: ";
pub const ORDER_PROMPT: &str = "Enter the name of the item to order (or 'done' to finish): ";

pub const MSG_INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const MSG_INVALID_TYPE: &str = "Invalid item type.";
pub const MSG_INVALID_PRICE: &str = "Invalid price, please enter a number.";
pub const MSG_ADDED: &str = "Item added successfully.";
pub const MSG_REMOVED: &str = "Item removed successfully.";
pub const MSG_ADDED_TO_ORDER: &str = "Item added to order.";
pub const MSG_NOT_FOUND: &str = "Item not found.";

/// Drives the menu state machine over a [`Console`].
///
/// Owns the catalog for the lifetime of the session. User mistakes are
/// printed and recovered from; only console failures are returned.
/// Running out of input ends the session as if Exit had been chosen.
pub struct Session<C> {
    catalog: Catalog,
    console: C,
}

impl<C: Console> Session<C> {
    pub fn new(catalog: Catalog, console: C) -> Self {
        Self { catalog, console }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_parts(self) -> (Catalog, C) {
        (self.catalog, self.console)
    }

    /// Run until Exit is chosen or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::MainMenu;

        while !state.is_terminal() {
            debug!("state: {:?}", state);
            state = self.step(state)?;
        }

        info!("session finished with {} menu items", self.catalog.len());
        Ok(())
    }

    /// Execute one state and return the next.
    pub fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::MainMenu => self.main_menu(),
            State::AddItem => self.add_item(),
            State::RemoveItem => self.remove_item(),
            State::DisplayMenu => {
                render::display_catalog(&mut self.console, &self.catalog)?;
                Ok(State::MainMenu)
            }
            State::TakeOrder => self.take_order(),
            State::Exit => Ok(State::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<State> {
        render::display_main_menu(&mut self.console)?;
        let Some(input) = read(&mut self.console, CHOICE_PROMPT)? else {
            return Ok(State::Exit);
        };

        match transitions::select(&input) {
            Ok(next) => Ok(next),
            Err(e) => {
                debug!("{}", e);
                self.console.say(MSG_INVALID_CHOICE)?;
                Ok(State::MainMenu)
            }
        }
    }

    fn add_item(&mut self) -> Result<State> {
        let Some(kind) = read(&mut self.console, TYPE_PROMPT)? else {
            return Ok(State::Exit);
        };
        let Some(name) = read(&mut self.console, NAME_PROMPT)? else {
            return Ok(State::Exit);
        };

        let price = loop {
            let Some(input) = read(&mut self.console, PRICE_PROMPT)? else {
                return Ok(State::Exit);
            };
            match transitions::parse_price(&input) {
                Ok(price) => break price,
                Err(e) => {
                    debug!("{}", e);
                    self.console.say(MSG_INVALID_PRICE)?;
                }
            }
        };

        match transitions::build_item(&kind, &name, price) {
            Ok(item) => {
                self.catalog.add(item);
                self.console.say(MSG_ADDED)?;
            }
            Err(e) => {
                debug!("{}", e);
                self.console.say(MSG_INVALID_TYPE)?;
            }
        }

        Ok(State::MainMenu)
    }

    fn remove_item(&mut self) -> Result<State> {
        let Some(name) = read(&mut self.console, REMOVE_PROMPT)? else {
            return Ok(State::Exit);
        };

        // Reported as removed even when nothing matched.
        let removed = self.catalog.remove(&name);
        if removed == 0 {
            debug!("no menu item named '{}'", name.trim());
        }
        self.console.say(MSG_REMOVED)?;

        Ok(State::MainMenu)
    }

    fn take_order(&mut self) -> Result<State> {
        let Self { catalog, console } = self;
        let catalog: &Catalog = catalog;
        let mut order = Order::new();
        let mut next = State::MainMenu;

        loop {
            console.say("\nMenu:")?;
            render::display_catalog(console, catalog)?;

            let Some(input) = read(console, ORDER_PROMPT)? else {
                next = State::Exit;
                break;
            };

            match transitions::order_step(catalog, &mut order, &input) {
                OrderStep::Done => break,
                OrderStep::Added(item) => {
                    debug!("order add: {}", item.name());
                    console.say(MSG_ADDED_TO_ORDER)?;
                }
                OrderStep::NotFound { suggestion } => {
                    console.say(MSG_NOT_FOUND)?;
                    if let Some(item) = suggestion {
                        console.say(&format!("Did you mean '{}'?", item.name()))?;
                    }
                }
            }
        }

        render::display_order(console, &order)?;
        Ok(next)
    }
}

/// Prompt and read a line, logging when input runs out.
fn read<C: Console>(console: &mut C, prompt: &str) -> Result<Option<String>> {
    let line = console.prompt(prompt)?;
    if line.is_none() {
        warn!("end of input; leaving session");
    }
    Ok(line)
}
