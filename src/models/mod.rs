mod item;
mod order;

pub use item::{ItemKind, MenuItem};
pub use order::Order;
