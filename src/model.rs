//! Code for simulation models.
use crate::customer::Customer;
use crate::shop::Shop;
use crate::units::MoneyPerLitre;
use std::path::PathBuf;

/// Model definition
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Path to the model folder
    pub model_path: PathBuf,
    /// The price of a litre of fuel, the same for every customer
    pub fuel_price: MoneyPerLitre,
    /// Shops in the order they are considered. Names may repeat.
    pub shops: Vec<Shop>,
    /// Customers in the order they go shopping. Names may repeat.
    pub customers: Vec<Customer>,
}
