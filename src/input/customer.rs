//! Code for reading customers from the model configuration.
use crate::customer::{Car, Customer, CustomerID};
use crate::geometry::Point;
use crate::id::check_ids;
use crate::shop::Cart;
use crate::units::{LitresPerHundredDistance, Money, MoneyPerLitre};
use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// A car as it appears in the configuration file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CarRaw {
    brand: String,
    fuel_consumption: LitresPerHundredDistance,
}

/// A customer as it appears in the configuration file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CustomerRaw {
    name: String,
    #[serde(default)]
    product_cart: Cart,
    location: Point,
    money: Money,
    car: CarRaw,
}

impl CarRaw {
    /// Validate the raw car and convert it into a [`Car`]
    fn into_car(self) -> Result<Car> {
        ensure!(!self.brand.trim().is_empty(), "Car brand cannot be empty");
        ensure!(
            self.fuel_consumption.is_finite()
                && self.fuel_consumption >= LitresPerHundredDistance(0.0),
            "Fuel consumption must be a finite number greater than or equal to zero"
        );

        Ok(Car {
            brand: self.brand,
            fuel_consumption: self.fuel_consumption,
        })
    }
}

impl CustomerRaw {
    /// Validate the raw customer and convert it into a [`Customer`]
    fn into_customer(self, fuel_price: MoneyPerLitre) -> Result<Customer> {
        ensure!(
            self.location.is_finite(),
            "Location coordinates must be finite"
        );
        ensure!(self.money.is_finite(), "Money must be a finite number");
        let car = self.car.into_car()?;

        Ok(Customer::new(
            self.name.into(),
            self.product_cart,
            self.location,
            self.money,
            car,
            fuel_price,
        ))
    }
}

/// Validate customers read from the configuration file.
///
/// # Arguments
///
/// * `customers_raw` - Customers as listed in the configuration file
/// * `fuel_price` - The price of fuel, shared by all customers
///
/// # Returns
///
/// The customers in the order they were listed, or an error if any are invalid.
pub fn read_customers(
    customers_raw: Vec<CustomerRaw>,
    fuel_price: MoneyPerLitre,
) -> Result<Vec<Customer>> {
    let customers = customers_raw
        .into_iter()
        .map(|raw| {
            let name = raw.name.clone();
            raw.into_customer(fuel_price)
                .with_context(|| format!("Invalid customer: {name}"))
        })
        .collect::<Result<Vec<_>>>()?;

    check_ids::<CustomerID, _>(&customers).context("Invalid customer names")?;

    Ok(customers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use indexmap::indexmap;
    use rstest::{fixture, rstest};

    #[fixture]
    fn customer_raw() -> CustomerRaw {
        CustomerRaw {
            name: "Bob".into(),
            product_cart: indexmap! {"milk".into() => 4},
            location: Point::new(12.0, -2.0),
            money: Money(55.0),
            car: CarRaw {
                brand: "Suzuki".into(),
                fuel_consumption: LitresPerHundredDistance(9.9),
            },
        }
    }

    #[rstest]
    fn test_read_customers(customer_raw: CustomerRaw) {
        let customers = read_customers(vec![customer_raw], MoneyPerLitre(2.4)).unwrap();
        let bob = &customers[0];
        assert_eq!(bob.id, CustomerID::from("Bob"));
        assert_eq!(bob.home(), Point::new(12.0, -2.0));
        assert_eq!(bob.location(), bob.home());
        assert_eq!(bob.money(), Money(55.0));
        assert_eq!(bob.fuel_price, MoneyPerLitre(2.4));
        assert_eq!(bob.car.fuel_consumption, LitresPerHundredDistance(9.9));
        assert_eq!(bob.cart.len(), 1);
    }

    #[rstest]
    fn test_read_customers_negative_money_allowed(mut customer_raw: CustomerRaw) {
        customer_raw.money = Money(-5.0);
        assert!(read_customers(vec![customer_raw], MoneyPerLitre(2.4)).is_ok());
    }

    #[rstest]
    fn test_read_customers_same_name(customer_raw: CustomerRaw) {
        let mut other = customer_raw.clone();
        other.money = Money(1.0);
        let customers = read_customers(vec![customer_raw, other], MoneyPerLitre(2.4)).unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].money(), Money(55.0));
        assert_eq!(customers[1].money(), Money(1.0));
    }

    #[rstest]
    fn test_read_customers_empty_name(mut customer_raw: CustomerRaw) {
        customer_raw.name = String::new();
        assert_error!(
            read_customers(vec![customer_raw], MoneyPerLitre(2.4)),
            "Invalid customer names"
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_read_customers_bad_money(mut customer_raw: CustomerRaw, #[case] money: f64) {
        customer_raw.money = Money(money);
        assert_error!(
            read_customers(vec![customer_raw], MoneyPerLitre(2.4)),
            "Invalid customer: Bob"
        );
    }

    #[rstest]
    #[case("Suzuki", -1.0, false)]
    #[case("Suzuki", f64::NAN, false)]
    #[case("", 9.9, false)]
    #[case("Suzuki", 0.0, true)]
    #[case("Suzuki", 9.9, true)]
    fn test_car_into_car(
        #[case] brand: &str,
        #[case] fuel_consumption: f64,
        #[case] expected_valid: bool,
    ) {
        let car = CarRaw {
            brand: brand.into(),
            fuel_consumption: LitresPerHundredDistance(fuel_consumption),
        };
        assert_eq!(car.into_car().is_ok(), expected_valid);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let json = r#"{"name": "Bob", "product_cart": {"milk": -1}, "location": [0, 0],
            "money": 1, "car": {"brand": "Ford", "fuel_consumption": 5}}"#;
        assert!(serde_json::from_str::<CustomerRaw>(json).is_err());
    }
}
