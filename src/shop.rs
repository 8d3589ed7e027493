//! Shops, their price lists and the receipts they issue.
use crate::customer::CustomerID;
use crate::geometry::Point;
use crate::id::{define_id_getter, define_id_type};
use crate::units::{Dimensionless, Money};
use chrono::{Local, NaiveDateTime};
use indexmap::IndexMap;
use log::info;
use std::fmt;

define_id_type! {ShopID}
define_id_type! {ProductID}

/// The unit price of each product sold by a shop
pub type ProductPriceMap = IndexMap<ProductID, Money>;

/// The quantity of each product a customer wants to buy
pub type Cart = IndexMap<ProductID, u32>;

/// The format of the timestamp printed at the top of a receipt
const RECEIPT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A shop at a fixed location selling products at fixed unit prices
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    /// The shop's name
    pub id: ShopID,
    /// Where the shop is
    pub location: Point,
    /// Price list
    pub products: ProductPriceMap,
}
define_id_getter! {Shop, ShopID}

impl Shop {
    /// The price of a single unit of `product_id`.
    ///
    /// Products the shop doesn't stock are priced at zero.
    pub fn unit_price(&self, product_id: &ProductID) -> Money {
        self.products.get(product_id).copied().unwrap_or_default()
    }

    /// Price each entry of the cart, in cart order.
    ///
    /// Both [`Shop::total_price`] and [`Shop::commit_purchase`] are computed from this, so the two
    /// always agree.
    fn iter_line_items<'a>(&'a self, cart: &'a Cart) -> impl Iterator<Item = ReceiptLine> + 'a {
        cart.iter().map(|(product_id, &quantity)| ReceiptLine {
            product_id: product_id.clone(),
            quantity,
            cost: self.unit_price(product_id) * Dimensionless::from(quantity),
        })
    }

    /// The total price of the products in `cart`
    pub fn total_price(&self, cart: &Cart) -> Money {
        self.iter_line_items(cart).map(|line| line.cost).sum()
    }

    /// Sell the products in `cart` to the given customer.
    ///
    /// The receipt is written to the log and returned. Its total is the same as
    /// [`Shop::total_price`] for the same cart.
    pub fn commit_purchase(&self, customer_id: &CustomerID, cart: &Cart) -> Receipt {
        let receipt = Receipt::new(
            customer_id.clone(),
            self.id.clone(),
            Local::now().naive_local(),
            self.iter_line_items(cart).collect(),
        );

        for line in receipt.to_string().lines() {
            info!("{line}");
        }

        receipt
    }
}

/// A single purchased product on a receipt
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// The product bought
    pub product_id: ProductID,
    /// How many were bought
    pub quantity: u32,
    /// The cost of all units of this product
    pub cost: Money,
}

/// The record of a completed purchase
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Who made the purchase
    pub customer_id: CustomerID,
    /// Where the purchase was made
    pub shop_id: ShopID,
    /// When the purchase was made (local time)
    pub timestamp: NaiveDateTime,
    /// One line per product in the cart
    pub lines: Vec<ReceiptLine>,
    /// The sum of the costs of all lines
    pub total: Money,
}

impl Receipt {
    /// Create a new [`Receipt`], totalling up the line costs
    pub fn new(
        customer_id: CustomerID,
        shop_id: ShopID,
        timestamp: NaiveDateTime,
        lines: Vec<ReceiptLine>,
    ) -> Self {
        let total = lines.iter().map(|line| line.cost).sum();
        Self {
            customer_id,
            shop_id,
            timestamp,
            lines,
            total,
        }
    }
}

/// Format a line cost to two decimal places, dropping trailing zeros (e.g. `2.50` -> `2.5`)
fn format_line_cost(cost: Money) -> String {
    format!("{cost:.2}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format a receipt total to one decimal place, dropping a trailing `.0`
fn format_total_cost(total: Money) -> String {
    let formatted = format!("{total:.1}");
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Date: {}",
            self.timestamp.format(RECEIPT_TIMESTAMP_FORMAT)
        )?;
        writeln!(f, "Thanks, {}, for your purchase!", self.customer_id)?;
        writeln!(f, "You have bought:")?;
        for line in &self.lines {
            writeln!(
                f,
                "{} {}s for {} dollars",
                line.quantity,
                line.product_id,
                format_line_cost(line.cost)
            )?;
        }
        writeln!(f, "Total cost is {} dollars", format_total_cost(self.total))?;
        write!(f, "See you again!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{cart, shop};
    use chrono::NaiveDate;
    use float_cmp::assert_approx_eq;
    use indexmap::indexmap;
    use rstest::rstest;

    #[rstest]
    fn test_unit_price(shop: Shop) {
        assert_eq!(shop.unit_price(&"milk".into()), Money(3.0));
        assert_eq!(shop.unit_price(&"caviar".into()), Money(0.0));
    }

    #[rstest]
    fn test_total_price(shop: Shop, cart: Cart) {
        // 2 * 3 (milk) + 1 * 1.25 (bread) + 3 * 0.8 (butter)
        assert_approx_eq!(Money, shop.total_price(&cart), Money(9.65), epsilon = 1e-10);
    }

    #[rstest]
    fn test_total_price_empty_cart(shop: Shop) {
        let total = shop.total_price(&Cart::new());
        assert_eq!(total, Money(0.0));
        assert!(total.value().is_sign_positive());
    }

    #[rstest]
    fn test_total_price_unknown_product(shop: Shop) {
        let cart: Cart = indexmap! {"apple".into() => 2, "milk".into() => 1};
        assert_eq!(shop.total_price(&cart), Money(3.0));
    }

    #[rstest]
    fn test_commit_purchase_matches_total_price(shop: Shop, cart: Cart) {
        let receipt = shop.commit_purchase(&"Bob".into(), &cart);
        assert_eq!(receipt.total, shop.total_price(&cart));
        assert_eq!(receipt.customer_id, CustomerID::from("Bob"));
        assert_eq!(receipt.shop_id, shop.id);
        assert_eq!(receipt.lines.len(), 3);
    }

    #[rstest]
    fn test_commit_purchase_unknown_product(shop: Shop) {
        let cart: Cart = indexmap! {"apple".into() => 2};
        let receipt = shop.commit_purchase(&"Bob".into(), &cart);
        assert_eq!(receipt.total, Money(0.0));
        assert_eq!(receipt.total, shop.total_price(&cart));
        assert_eq!(receipt.lines[0].cost, Money(0.0));
    }

    #[rstest]
    #[case(3.0, "3")]
    #[case(2.5, "2.5")]
    #[case(1.25, "1.25")]
    #[case(10.0, "10")]
    #[case(0.0, "0")]
    fn test_format_line_cost(#[case] cost: f64, #[case] expected: &str) {
        assert_eq!(format_line_cost(Money(cost)), expected);
    }

    #[rstest]
    #[case(9.65, "9.7")]
    #[case(6.0, "6")]
    #[case(100.0, "100")]
    #[case(0.0, "0")]
    #[case(2.5, "2.5")]
    fn test_format_total_cost(#[case] total: f64, #[case] expected: &str) {
        assert_eq!(format_total_cost(Money(total)), expected);
    }

    #[rstest]
    fn test_receipt_display(shop: Shop) {
        let timestamp = NaiveDate::from_ymd_opt(2021, 1, 4)
            .unwrap()
            .and_hms_opt(12, 33, 41)
            .unwrap();
        let cart: Cart = indexmap! {"milk".into() => 2, "bread".into() => 2};
        let receipt = Receipt::new(
            "Bob".into(),
            shop.id.clone(),
            timestamp,
            shop.iter_line_items(&cart).collect(),
        );

        let expected = "\
Date: 04/01/2021 12:33:41
Thanks, Bob, for your purchase!
You have bought:
2 milks for 6 dollars
2 breads for 2.5 dollars
Total cost is 8.5 dollars
See you again!";
        assert_eq!(receipt.to_string(), expected);
    }
}
