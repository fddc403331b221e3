mod console;
pub mod render;

pub use console::{Console, LineConsole, TermConsole};
