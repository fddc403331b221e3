use std::fs;
use std::path::Path;

use log::info;

use crate::error::{MenuError, Result};
use crate::models::MenuItem;
use crate::state::Catalog;

/// Load a starting catalog from a JSON array of items.
///
/// The file is only read. Duplicates are kept in file order; any item with a
/// negative or non-finite price rejects the whole file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;

    if let Some(bad) = items.iter().find(|item| !item.is_valid()) {
        return Err(MenuError::InvalidSeed(format!(
            "'{}' has invalid price {}",
            bad.name(),
            bad.price()
        )));
    }

    info!("loaded {} menu items from {}", items.len(), path.display());
    Ok(Catalog::new(items))
}
