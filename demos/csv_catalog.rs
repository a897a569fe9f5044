//! Example: CSV Catalog
//!
//! Streams a `name,price` catalog file into a basket and prints the outcome.
//! Malformed rows are skipped rather than failing the run.
//!
//! Usage:
//!   cargo run --example csv_catalog -- catalog.csv 200
//!
//! Or create a test file:
//!   printf "name,price\nLaptop,1500\nMouse,25\nKeyboard,100\n" > /tmp/catalog.csv
//!   cargo run --example csv_catalog -- /tmp/catalog.csv 200

use std::env;

use basket::app::{init_tracing, write_summary};
use basket::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <catalog.csv> <limit>", args[0]);
        std::process::exit(1);
    }

    let limit = FixedPoint::from_decimal_str(&args[2])?;
    let catalog = CsvCatalogStream::<FixedPoint>::from_file(&args[1]).await?;

    eprintln!("=== CSV Catalog Example ===");
    eprintln!("Catalog: {}", args[1]);
    eprintln!("Limit:   {}", limit);
    eprintln!();

    let report = SequenceProcessor::new(StreamSource::new(catalog), Basket::new(limit))
        .with_error_policy(SkipErrors)
        .process()
        .await?;

    eprintln!(
        "Presented {} items, skipped {} bad rows",
        report.presented, report.skipped
    );
    write_summary(&report.result, Some(report.reason), &mut tokio::io::stdout()).await?;

    Ok(())
}
