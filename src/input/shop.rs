//! Code for reading shops from the model configuration.
use crate::geometry::Point;
use crate::id::check_ids;
use crate::shop::{ProductPriceMap, Shop, ShopID};
use crate::units::Money;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// A shop as it appears in the configuration file
#[derive(Debug, Deserialize, PartialEq)]
pub struct ShopRaw {
    name: String,
    location: Point,
    #[serde(default)]
    products: ProductPriceMap,
}

/// Check that every product has a finite, non-negative price
fn check_prices(products: &ProductPriceMap) -> Result<()> {
    for (product_id, price) in products {
        ensure!(
            price.is_finite() && *price >= Money(0.0),
            "Price for product {product_id} must be a finite number greater than or equal to zero"
        );
    }

    Ok(())
}

impl ShopRaw {
    /// Validate the raw shop and convert it into a [`Shop`]
    fn into_shop(self) -> Result<Shop> {
        ensure!(
            self.location.is_finite(),
            "Location coordinates must be finite"
        );
        check_prices(&self.products)?;

        Ok(Shop {
            id: self.name.into(),
            location: self.location,
            products: self.products,
        })
    }
}

/// Validate shops read from the configuration file.
///
/// # Returns
///
/// The shops in the order they were listed, or an error if any are invalid.
pub fn read_shops(shops_raw: Vec<ShopRaw>) -> Result<Vec<Shop>> {
    let shops = shops_raw
        .into_iter()
        .map(|raw| {
            let name = raw.name.clone();
            raw.into_shop()
                .with_context(|| format!("Invalid shop: {name}"))
        })
        .collect::<Result<Vec<_>>>()?;

    check_ids::<ShopID, _>(&shops).context("Invalid shop names")?;

    Ok(shops)
}
