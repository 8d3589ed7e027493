//! Integration tests for loading the demo models.
mod common;
use common::get_demo_dir;
use float_cmp::assert_approx_eq;
use shoptrip::input::load_model;
use shoptrip::units::MoneyPerLitre;

/// Load the JSON-configured demo model
#[test]
fn test_load_simple_demo() {
    let model = load_model(get_demo_dir("simple")).unwrap().unwrap();
    assert_approx_eq!(MoneyPerLitre, model.fuel_price, MoneyPerLitre(2.4));
    assert_eq!(model.shops.len(), 3);
    assert_eq!(model.customers.len(), 3);

    // Listing order is kept
    let names: Vec<_> = model
        .customers
        .iter()
        .map(|customer| customer.id.as_str())
        .collect();
    assert_eq!(names, ["Bob", "Alex", "Monica"]);
}

/// Load the TOML-configured demo model
#[test]
fn test_load_toml_demo() {
    let model = load_model(get_demo_dir("toml_config")).unwrap().unwrap();
    assert_approx_eq!(MoneyPerLitre, model.fuel_price, MoneyPerLitre(1.8));
    assert_eq!(model.shops.len(), 2);
    assert_eq!(model.customers.len(), 1);
}

/// A directory without a configuration file has nothing to load
#[test]
fn test_load_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_model(dir.path()).unwrap().is_none());
}
