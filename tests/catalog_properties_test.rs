#[macro_use]
extern crate assert_float_eq;

use restaurant_menu_rs::models::{ItemKind, MenuItem, Order};
use restaurant_menu_rs::state::Catalog;

fn sample_items() -> Vec<MenuItem> {
    vec![
        MenuItem::food("Nachos", 6.25).unwrap(),
        MenuItem::drink("Lemonade", 2.00).unwrap(),
        MenuItem::food("nachos", 7.00).unwrap(),
        MenuItem::drink("Espresso", 2.75).unwrap(),
        MenuItem::food("Fries", 0.0).unwrap(),
    ]
}

#[test]
fn test_add_then_list_preserves_order_and_length() {
    let mut catalog = Catalog::new(Vec::new());
    let items = sample_items();

    for (added, item) in items.iter().enumerate() {
        catalog.add(item.clone());
        assert_eq!(catalog.list().count(), added + 1);
    }

    let listed: Vec<&MenuItem> = catalog.list().collect();
    let expected: Vec<&MenuItem> = items.iter().collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_remove_then_find_is_not_found() {
    let mut catalog = Catalog::new(sample_items());

    for name in ["NACHOS", "lemonade", "Espresso", "fries"] {
        catalog.remove(name);
        assert!(catalog.find_by_name(name).is_none());
    }
    assert!(catalog.is_empty());
}

#[test]
fn test_remove_unknown_name_changes_nothing() {
    let mut catalog = Catalog::with_defaults();
    let before: Vec<MenuItem> = catalog.list().cloned().collect();

    assert_eq!(catalog.remove("Lasagna"), 0);

    let after: Vec<MenuItem> = catalog.list().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_fresh_catalog_finds_burger() {
    let catalog = Catalog::with_defaults();
    let burger = catalog.find_by_name("burger").unwrap();

    assert_eq!(burger.name(), "Burger");
    assert_float_absolute_eq!(burger.price(), 5.99, 0.005);
    assert_eq!(burger.kind(), ItemKind::Food);
}

#[test]
fn test_order_totals() {
    let catalog = Catalog::with_defaults();

    let empty = Order::new();
    assert_eq!(empty.total(), 0.0);

    let mut order = Order::new();
    order.add_item(catalog.find_by_name("burger").unwrap());
    order.add_item(catalog.find_by_name("coke").unwrap());
    assert_float_absolute_eq!(order.total(), 7.98, 0.005);

    let mut cokes = Order::new();
    let coke = catalog.find_by_name("Coke").unwrap();
    cokes.add_item(coke);
    cokes.add_item(coke);
    assert_float_absolute_eq!(cokes.total(), 3.98, 0.005);
    assert_eq!(
        cokes.display(),
        vec!["Coke - $1.99", "Coke - $1.99", "Total: $3.98"]
    );
}

#[test]
fn test_totals_never_negative() {
    let catalog = Catalog::new(sample_items());
    let mut order = Order::new();

    for item in catalog.list() {
        order.add_item(item);
        assert!(order.total() >= 0.0);
    }
    assert_float_absolute_eq!(order.total(), 18.0, 0.005);
}
