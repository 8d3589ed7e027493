//! Functionality for running the shopping trip simulation.
use crate::customer::{Customer, CustomerID, TripQuote};
use crate::model::Model;
use crate::output::DataWriter;
use crate::output::metadata::write_metadata;
use crate::shop::{Receipt, Shop, ShopID};
use crate::units::Money;
use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};
use std::path::Path;

/// A customer's quote for a trip to one shop
#[derive(Debug, Clone, PartialEq)]
pub struct ShopQuote {
    /// The shop quoted for
    pub shop_id: ShopID,
    /// Breakdown of the trip's costs
    pub quote: TripQuote,
    /// The total cost of the trip, rounded to the nearest cent
    pub total_cost: Money,
}

/// What happened when a customer went shopping
#[derive(Debug, Clone, PartialEq)]
pub enum TripOutcome {
    /// The customer went to the cheapest shop and bought everything in their cart
    Completed {
        /// Where the customer shopped
        shop_id: ShopID,
        /// The rounded cost of the trip
        total_cost: Money,
        /// The receipt from the shop
        receipt: Receipt,
    },
    /// The customer couldn't afford a trip to any shop
    Unaffordable {
        /// The cheapest shop and the cost of a trip there, if there were any shops
        cheapest: Option<(ShopID, Money)>,
    },
}

/// The record of a single customer's turn in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerTrip {
    /// The customer
    pub customer_id: CustomerID,
    /// Money before setting off
    pub starting_money: Money,
    /// Quotes for every shop, in the order the shops were considered
    pub quotes: Vec<ShopQuote>,
    /// Whether and where the customer shopped
    pub outcome: TripOutcome,
    /// Money once the customer is home again
    pub final_money: Money,
}

/// Get a quote from the customer's home to every shop, in order
pub fn quote_shops(customer: &Customer, shops: &[Shop]) -> Vec<ShopQuote> {
    shops
        .iter()
        .map(|shop| {
            let quote = customer.quote_trip(shop);
            ShopQuote {
                shop_id: shop.id.clone(),
                quote,
                total_cost: quote.rounded_total(),
            }
        })
        .collect()
}

/// Find the position of the cheapest quote.
///
/// Where several quotes share the lowest cost, the first one wins. Returns `None` if there are no
/// quotes.
pub fn find_cheapest_shop(quotes: &[ShopQuote]) -> Option<usize> {
    let mut cheapest_cost = Money(f64::INFINITY);
    let mut cheapest = None;
    for (idx, shop_quote) in quotes.iter().enumerate() {
        if shop_quote.total_cost < cheapest_cost {
            cheapest_cost = shop_quote.total_cost;
            cheapest = Some(idx);
        }
    }

    cheapest
}

/// Let a customer pick the cheapest shop and go shopping there if they can afford it.
///
/// Nothing about the customer changes if they can't afford any trip.
pub fn shop_for_customer(customer: &mut Customer, shops: &[Shop]) -> CustomerTrip {
    let starting_money = customer.money();
    info!("{} has {} dollars", customer.id, starting_money);

    let quotes = quote_shops(customer, shops);
    for shop_quote in &quotes {
        info!(
            "{}'s trip to the {} costs {:.2}",
            customer.id, shop_quote.shop_id, shop_quote.total_cost
        );
        debug!("{:?}", shop_quote.quote);
    }

    let cheapest = find_cheapest_shop(&quotes).map(|idx| (&shops[idx], &quotes[idx]));
    let outcome = match cheapest {
        Some((shop, cheapest)) if cheapest.total_cost <= customer.money() => {
            let receipt = customer.ride_to_shop(shop);
            TripOutcome::Completed {
                shop_id: cheapest.shop_id.clone(),
                total_cost: cheapest.total_cost,
                receipt,
            }
        }
        _ => {
            info!(
                "{} doesn't have enough money to make a purchase in any shop",
                customer.id
            );
            TripOutcome::Unaffordable {
                cheapest: cheapest.map(|(_, quote)| (quote.shop_id.clone(), quote.total_cost)),
            }
        }
    };

    CustomerTrip {
        customer_id: customer.id.clone(),
        starting_money,
        quotes,
        outcome,
        final_money: customer.money(),
    }
}

/// Run the simulation.
///
/// Customers go shopping one after another, in the order they are listed.
///
/// # Arguments:
///
/// * `model` - The model to run
/// * `output_path` - The folder to which output files will be written
/// * `debug_model` - Whether to write additional information (e.g. every trip quote) to file
pub fn run(model: &mut Model, output_path: &Path, debug_model: bool) -> Result<Vec<CustomerTrip>> {
    write_metadata(output_path, model)?;
    info!(
        "Shops open today: {}",
        model.shops.iter().map(|shop| shop.id.as_str()).join(", ")
    );
    let mut writer = DataWriter::create(output_path, debug_model)?;

    let mut trips = Vec::with_capacity(model.customers.len());
    for customer in &mut model.customers {
        let trip = shop_for_customer(customer, &model.shops);
        writer.write_trip(&trip)?;
        trips.push(trip);
    }
    writer.flush()?;

    let completed = trips
        .iter()
        .filter(|trip| matches!(trip.outcome, TripOutcome::Completed { .. }))
        .count();
    info!(
        "{completed} customers went shopping; {} stayed at home",
        trips.len() - completed
    );

    Ok(trips)
}
