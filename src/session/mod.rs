mod runner;
pub mod transitions;

pub use runner::Session;
pub use transitions::{OrderStep, State};
