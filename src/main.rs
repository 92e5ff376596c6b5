//! Sales Analytics CLI
//!
//! Command-line interface for computing per-seller sales statistics from a
//! JSON dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data.json > report.json
//! cargo run -- --format csv data.json > report.csv
//! cargo run -- --revenue retail-price --bonus leader-share data.json
//! RUST_LOG=debug cargo run -- --top-products 5 data.json
//! ```
//!
//! The report goes to stdout; logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed dataset, write failure, etc.)

use sales_analytics::cli;
use sales_analytics::pipeline::Pipeline;
use sales_analytics::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let pipeline = Pipeline::new(
        args.to_analysis_config(),
        strategy::create_strategies(args.revenue, args.bonus),
        args.format,
    );

    let mut output = std::io::stdout().lock();
    if let Err(e) = pipeline.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
