mod catalog;
mod seed;

pub use catalog::Catalog;
pub use seed::load_catalog;
