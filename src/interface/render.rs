use crate::error::Result;
use crate::interface::Console;
use crate::models::Order;
use crate::state::Catalog;

pub const MAIN_MENU: [&str; 6] = [
    "\nRestaurant Management System",
    "1. Add Menu Item",
    "2. Remove Menu Item",
    "3. Display Menu",
    "4. Take Order",
    "5. Exit",
];

/// Print the main menu banner and options.
pub fn display_main_menu<C: Console>(console: &mut C) -> Result<()> {
    for line in MAIN_MENU {
        console.say(line)?;
    }
    Ok(())
}

/// Print every catalog item as `"<name> - $<price>"`.
pub fn display_catalog<C: Console>(console: &mut C, catalog: &Catalog) -> Result<()> {
    for item in catalog.list() {
        console.say(&item.to_string())?;
    }
    Ok(())
}

/// Print the order lines followed by its total.
pub fn display_order<C: Console>(console: &mut C, order: &Order<'_>) -> Result<()> {
    console.say("\nYour Order:")?;
    for line in order.display() {
        console.say(&line)?;
    }
    Ok(())
}
