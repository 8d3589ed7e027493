//! Integration tests for the `example run` command.
mod common;
use common::{read_csv, silence_logging};
use shoptrip::cli::RunOpts;
use shoptrip::cli::example::handle_example_run_command;
use shoptrip::settings::Settings;
use tempfile::tempdir;

#[test]
fn test_handle_example_run_command() {
    silence_logging();
    let tempdir = tempdir().unwrap();
    let opts = RunOpts {
        output_dir: Some(tempdir.path().to_path_buf()),
        ..RunOpts::default()
    };
    handle_example_run_command("toml_config", &opts, Some(Settings::default())).unwrap();

    let receipts = read_csv(&tempdir.path().join("receipts.csv"));
    let products: Vec<_> = receipts.iter().map(|row| row[2].to_string()).collect();
    assert_eq!(products, ["apples", "flour", "honey"]);
}

#[test]
fn test_example_run_not_found() {
    silence_logging();
    let tempdir = tempdir().unwrap();
    let opts = RunOpts {
        output_dir: Some(tempdir.path().to_path_buf()),
        ..RunOpts::default()
    };
    assert!(handle_example_run_command("no_such_example", &opts, Some(Settings::default())).is_err());
}
