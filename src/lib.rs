pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{ItemKind, MenuItem, Order};
pub use session::Session;
pub use state::Catalog;
