//! Common functionality for shoptrip, a simulation of customers choosing the cheapest shop to drive
//! to and buying their shopping there.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod cli;
pub mod customer;
pub mod geometry;
pub mod id;
pub mod input;
pub mod log;
pub mod model;
pub mod output;
pub mod settings;
pub mod shop;
pub mod simulation;
pub mod units;

#[cfg(test)]
mod fixture;

/// Get the path to the shoptrip config directory.
///
/// Falls back to the current directory if the platform config directory cannot be determined.
pub fn get_shoptrip_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("shoptrip");
    path
}
