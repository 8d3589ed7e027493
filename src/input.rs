//! Common routines for handling input data.
use crate::model::Model;
use crate::units::MoneyPerLitre;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub mod customer;
use customer::{CustomerRaw, read_customers};
pub mod shop;
use shop::{ShopRaw, read_shops};

/// Names of the files a model configuration may be read from, in order of preference
const CONFIG_FILE_NAMES: [&str; 2] = ["config.toml", "config.json"];

/// Format an error message to include the file path. To be used with `anyhow::Context`.
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
///
/// # Returns
///
/// * The deserialised TOML data or an error if the file could not be read or parsed.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let toml_data = toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))?;
    Ok(toml_data)
}

/// Parse a JSON file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the JSON file
///
/// # Returns
///
/// * The deserialised JSON data or an error if the file could not be read or parsed.
pub fn read_json<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let json_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let json_data = serde_json::from_str(&json_str).with_context(|| input_err_msg(file_path))?;
    Ok(json_data)
}

/// Read a TOML or JSON file, depending on the file extension
fn read_config_file<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    match file_path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => read_json(file_path),
        _ => read_toml(file_path),
    }
}

/// Get the path to the configuration file in `model_dir`, if there is one
pub fn find_config_file(model_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|file_name| model_dir.join(file_name))
        .find(|path| path.is_file())
}

/// Represents the contents of a model configuration file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "FUEL_PRICE", alias = "fuel_price")]
    fuel_price: MoneyPerLitre,
    #[serde(default)]
    shops: Vec<ShopRaw>,
    #[serde(default)]
    customers: Vec<CustomerRaw>,
}

/// Check that the fuel price is valid
fn check_fuel_price(fuel_price: MoneyPerLitre) -> Result<()> {
    ensure!(
        fuel_price.is_finite() && fuel_price >= MoneyPerLitre(0.0),
        "Fuel price must be a finite number greater than or equal to zero"
    );

    Ok(())
}

/// Read a model from the specified directory.
///
/// # Arguments
///
/// * `model_dir` - Folder containing the model configuration file
///
/// # Returns
///
/// The loaded model, `None` if the folder contains no configuration file or an error if the
/// configuration is invalid.
pub fn load_model<P: AsRef<Path>>(model_dir: P) -> Result<Option<Model>> {
    let model_dir = model_dir.as_ref();
    let Some(file_path) = find_config_file(model_dir) else {
        return Ok(None);
    };

    let config: ConfigFile = read_config_file(&file_path)?;
    let model = model_from_config(model_dir, config).with_context(|| input_err_msg(&file_path))?;

    Ok(Some(model))
}

/// Validate the raw configuration and convert it into a [`Model`]
fn model_from_config(model_dir: &Path, config: ConfigFile) -> Result<Model> {
    check_fuel_price(config.fuel_price)?;
    let shops = read_shops(config.shops)?;
    let customers = read_customers(config.customers, config.fuel_price)?;

    Ok(Model {
        model_path: model_dir.to_path_buf(),
        fuel_price: config.fuel_price,
        shops,
        customers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use crate::units::Money;
    use rstest::rstest;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const CONFIG_JSON: &str = r#"{
        "FUEL_PRICE": 2.4,
        "customers": [
            {
                "name": "Bob",
                "product_cart": {"milk": 4, "bread": 2, "butter": 5},
                "location": [12, -2],
                "money": 55,
                "car": {"brand": "Suzuki", "fuel_consumption": 9.9}
            }
        ],
        "shops": [
            {
                "name": "Outskirts Shop",
                "location": [10, -5],
                "products": {"milk": 3, "bread": 1, "butter": 2.5}
            },
            {
                "name": "Shop '24/7'",
                "location": [4, 3],
                "products": {"milk": 2, "bread": 1.5, "butter": 3.5}
            }
        ]
    }"#;

    const CONFIG_TOML: &str = r#"
fuel_price = 2.4

[[shops]]
name = "Outskirts Shop"
location = [10, -5]
products = { milk = 3, bread = 1, butter = 2.5 }

[[customers]]
name = "Bob"
product_cart = { milk = 4, bread = 2, butter = 5 }
location = [12, -2]
money = 55
car = { brand = "Suzuki", fuel_consumption = 9.9 }
"#;

    fn write_file(dir: &Path, file_name: &str, contents: &str) {
        let mut file = File::create(dir.join(file_name)).unwrap();
        write!(file, "{contents}").unwrap();
    }

    #[test]
    fn test_load_model_json() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "config.json", CONFIG_JSON);

        let model = load_model(dir.path()).unwrap().unwrap();
        assert_eq!(model.fuel_price, MoneyPerLitre(2.4));
        assert_eq!(
            model
                .shops
                .iter()
                .map(|shop| shop.id.as_str())
                .collect::<Vec<_>>(),
            ["Outskirts Shop", "Shop '24/7'"]
        );
        let bob = &model.customers[0];
        assert_eq!(bob.money(), Money(55.0));
        assert_eq!(bob.fuel_price, MoneyPerLitre(2.4));
        assert_eq!(bob.car.brand, "Suzuki");
        assert_eq!(
            bob.cart.keys().map(|id| id.as_str()).collect::<Vec<_>>(),
            ["milk", "bread", "butter"]
        );
    }

    #[test]
    fn test_load_model_toml() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "config.toml", CONFIG_TOML);

        let model = load_model(dir.path()).unwrap().unwrap();
        assert_eq!(model.shops.len(), 1);
        assert_eq!(model.customers.len(), 1);
        assert_eq!(model.model_path, dir.path());
    }

    #[test]
    fn test_load_model_prefers_toml() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "config.json", CONFIG_JSON);
        write_file(dir.path(), "config.toml", CONFIG_TOML);

        let model = load_model(dir.path()).unwrap().unwrap();
        assert_eq!(model.shops.len(), 1);
    }

    #[test]
    fn test_load_model_missing_config() {
        let dir = tempdir().unwrap();
        assert!(load_model(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_model_no_shops() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "config.toml",
            "fuel_price = 1.0\n[[customers]]\nname = \"Bob\"\nproduct_cart = {}\nlocation = [0, 0]\nmoney = 5\ncar = { brand = \"Ford\", fuel_consumption = 5 }\n",
        );

        let model = load_model(dir.path()).unwrap().unwrap();
        assert!(model.shops.is_empty());
        assert_eq!(model.customers.len(), 1);
    }

    #[test]
    fn test_load_model_invalid_json() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "config.json", "{ not json");
        let file_path = dir.path().join("config.json");
        assert_error!(load_model(dir.path()), input_err_msg(file_path));
    }

    #[test]
    fn test_load_model_invalid_fuel_price() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "config.toml", "fuel_price = -1.0\n");
        let file_path = dir.path().join("config.toml");
        let err = load_model(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), input_err_msg(file_path));
        assert_eq!(
            err.chain().nth(1).unwrap().to_string(),
            "Fuel price must be a finite number greater than or equal to zero"
        );
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(2.4, true)]
    #[case(-0.1, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn test_check_fuel_price(#[case] value: f64, #[case] expected_valid: bool) {
        assert_eq!(
            check_fuel_price(MoneyPerLitre(value)).is_ok(),
            expected_valid
        );
    }
}
