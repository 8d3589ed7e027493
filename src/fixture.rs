//! Fixtures for tests

use crate::customer::{Car, Customer};
use crate::geometry::Point;
use crate::model::Model;
use crate::shop::{Cart, Shop};
use crate::units::{LitresPerHundredDistance, Money, MoneyPerLitre};
use indexmap::indexmap;
use rstest::fixture;
use std::path::PathBuf;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

#[fixture]
pub fn cart() -> Cart {
    indexmap! {
        "milk".into() => 2,
        "bread".into() => 1,
        "butter".into() => 3,
    }
}

#[fixture]
pub fn shop() -> Shop {
    Shop {
        id: "Outskirts Shop".into(),
        location: Point::new(3.0, 4.0),
        products: indexmap! {
            "milk".into() => Money(3.0),
            "bread".into() => Money(1.25),
            "butter".into() => Money(0.8),
        },
    }
}

#[fixture]
pub fn customer(cart: Cart) -> Customer {
    Customer::new(
        "Bob".into(),
        cart,
        Point::new(0.0, 0.0),
        Money(50.0),
        Car {
            brand: "Suzuki".into(),
            fuel_consumption: LitresPerHundredDistance(8.0),
        },
        MoneyPerLitre(2.4),
    )
}

/// A model with one shop and two customers, only the first of whom can afford the trip
#[fixture]
pub fn model(shop: Shop, customer: Customer) -> Model {
    let poor_customer = Customer::new(
        "Alex".into(),
        customer.cart.clone(),
        Point::new(0.0, 0.0),
        Money(5.0),
        customer.car.clone(),
        customer.fuel_price,
    );

    Model {
        model_path: PathBuf::from("model"),
        fuel_price: MoneyPerLitre(2.4),
        shops: vec![shop],
        customers: vec![customer, poor_customer],
    }
}
