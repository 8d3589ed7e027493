//! The module responsible for writing output data to disk.
use crate::customer::CustomerID;
use crate::shop::{ProductID, ShopID};
use crate::simulation::{CustomerTrip, TripOutcome};
use crate::units::{Distance, Money};
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

pub mod metadata;

/// The root folder in which model-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "shoptrip_results";

/// The output file name for the outcome of each customer's trip
const TRIPS_FILE_NAME: &str = "trips.csv";

/// The output file name for receipt lines
const RECEIPTS_FILE_NAME: &str = "receipts.csv";

/// The output file name for the quotes each customer considered
const TRIP_QUOTES_FILE_NAME: &str = "debug_trip_quotes.csv";

/// Get the default output directory for the model specified at `model_dir`
pub fn get_output_dir(model_dir: &Path) -> Result<PathBuf> {
    // Get the model name from the dir path. This ends up being convoluted because we need to check
    // for all possible errors. Ugh.
    let model_dir = model_dir
        .canonicalize() // canonicalise in case the user has specified "."
        .context("Could not resolve path to model")?;

    let model_name = model_dir
        .file_name()
        .context("Model cannot be in root folder")?
        .to_str()
        .context("Invalid chars in model dir name")?;

    // Construct path
    Ok([OUTPUT_DIRECTORY_ROOT, model_name].iter().collect())
}

/// Create a new output directory for the model, optionally overwriting existing data
///
/// # Arguments
///
/// * `output_dir` - The output directory to create/overwrite
/// * `allow_overwrite` - Whether to delete and recreate the folder if it is non-empty
///
/// # Returns
///
/// True if the output dir contained existing data that was deleted, false if not, or an error.
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    // If the folder already exists, then delete it
    let overwrite = if let Ok(mut it) = fs::read_dir(output_dir) {
        if it.next().is_none() {
            // Folder exists and is empty: nothing to do
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. \
            Please delete the folder or pass the --overwrite command-line option."
        );

        fs::remove_dir_all(output_dir).context("Could not delete folder")?;
        true
    } else {
        false
    };

    // Try to create the directory, with parents
    fs::create_dir_all(output_dir)?;

    Ok(overwrite)
}

/// Whether a customer managed to go shopping
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum TripStatus {
    Completed,
    Unaffordable,
}

/// Represents a row in the trips CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct TripRow {
    customer_id: CustomerID,
    starting_money: Money,
    shop_id: Option<ShopID>,
    total_cost: Option<Money>,
    status: TripStatus,
    final_money: Money,
}

impl TripRow {
    /// Create a new [`TripRow`]
    fn new(trip: &CustomerTrip) -> Self {
        let (shop_id, total_cost, status) = match &trip.outcome {
            TripOutcome::Completed {
                shop_id,
                total_cost,
                ..
            } => (Some(shop_id.clone()), Some(*total_cost), TripStatus::Completed),
            TripOutcome::Unaffordable { cheapest } => {
                let (shop_id, total_cost) = cheapest.clone().unzip();
                (shop_id, total_cost, TripStatus::Unaffordable)
            }
        };

        Self {
            customer_id: trip.customer_id.clone(),
            starting_money: trip.starting_money,
            shop_id,
            total_cost,
            status,
            final_money: trip.final_money,
        }
    }
}

/// Represents a row in the receipts CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ReceiptRow {
    customer_id: CustomerID,
    shop_id: ShopID,
    product_id: ProductID,
    quantity: u32,
    cost: Money,
}

/// Represents a row in the trip quotes CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct TripQuoteRow {
    customer_id: CustomerID,
    shop_id: ShopID,
    distance: Distance,
    fuel_cost_one_way: Money,
    products_cost: Money,
    fuel_cost_home: Money,
    total_cost: Money,
}

/// An object for writing simulation results to file
pub struct DataWriter {
    trips_writer: csv::Writer<File>,
    receipts_writer: csv::Writer<File>,
    quotes_writer: Option<csv::Writer<File>>,
}

impl DataWriter {
    /// Open CSV files to write output data to
    ///
    /// # Arguments
    ///
    /// * `output_path` - Folder where files will be saved
    /// * `save_debug_info` - Whether to include extra CSV files for debugging model
    pub fn create(output_path: &Path, save_debug_info: bool) -> Result<Self> {
        let new_writer = |file_name| {
            let file_path = output_path.join(file_name);
            csv::Writer::from_path(file_path)
        };

        let quotes_writer = if save_debug_info {
            Some(new_writer(TRIP_QUOTES_FILE_NAME)?)
        } else {
            None
        };

        Ok(Self {
            trips_writer: new_writer(TRIPS_FILE_NAME)?,
            receipts_writer: new_writer(RECEIPTS_FILE_NAME)?,
            quotes_writer,
        })
    }

    /// Write a customer's trip, its receipt and (optionally) its quotes to file
    pub fn write_trip(&mut self, trip: &CustomerTrip) -> Result<()> {
        self.trips_writer.serialize(TripRow::new(trip))?;

        if let TripOutcome::Completed { receipt, .. } = &trip.outcome {
            for line in &receipt.lines {
                let row = ReceiptRow {
                    customer_id: receipt.customer_id.clone(),
                    shop_id: receipt.shop_id.clone(),
                    product_id: line.product_id.clone(),
                    quantity: line.quantity,
                    cost: line.cost,
                };
                self.receipts_writer.serialize(row)?;
            }
        }

        if let Some(ref mut wtr) = self.quotes_writer {
            for shop_quote in &trip.quotes {
                let row = TripQuoteRow {
                    customer_id: trip.customer_id.clone(),
                    shop_id: shop_quote.shop_id.clone(),
                    distance: shop_quote.quote.distance,
                    fuel_cost_one_way: shop_quote.quote.fuel_cost_one_way,
                    products_cost: shop_quote.quote.products_cost,
                    fuel_cost_home: shop_quote.quote.fuel_cost_home,
                    total_cost: shop_quote.total_cost,
                };
                wtr.serialize(row)?;
            }
        }

        Ok(())
    }

    /// Flush the underlying streams
    pub fn flush(&mut self) -> Result<()> {
        self.trips_writer.flush()?;
        self.receipts_writer.flush()?;
        if let Some(ref mut wtr) = self.quotes_writer {
            wtr.flush()?;
        }

        Ok(())
    }
}
