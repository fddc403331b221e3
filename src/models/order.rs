use crate::models::MenuItem;

/// Items picked from a catalog during one ordering flow.
///
/// The order borrows its items from the catalog; picking the same item
/// twice records it twice.
#[derive(Debug, Default, Clone)]
pub struct Order<'a> {
    items: Vec<&'a MenuItem>,
}

impl<'a> Order<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(&mut self, item: &'a MenuItem) {
        self.items.push(item);
    }

    /// Sum of item prices; `0.0` for an empty order.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price()).sum()
    }

    pub fn items(&self) -> &[&'a MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One `"<name> - $<price>"` line per item, then `"Total: $<total>"`.
    pub fn display(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.items.iter().map(|item| item.to_string()).collect();
        lines.push(format!("Total: ${:.2}", self.total()));
        lines
    }
}
