//! Helpers shared between integration tests.
//!
//! Each test binary only uses some of these, so dead code warnings are suppressed.
#![allow(dead_code)]
use std::path::{Path, PathBuf};

/// Get the path to one of the bundled demo models
pub fn get_demo_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

/// Stop the logger writing to the terminal while tests run
pub fn silence_logging() {
    unsafe { std::env::set_var("SHOPTRIP_LOG_LEVEL", "off") };
}

/// Read a CSV output file into a vector of records, skipping the header
pub fn read_csv(file_path: &Path) -> Vec<csv::StringRecord> {
    csv::Reader::from_path(file_path)
        .unwrap()
        .records()
        .map(Result::unwrap)
        .collect()
}
