//! File-in, report-out pipeline
//!
//! Orchestrates one run of the binary:
//! 1. Load the dataset with `json_reader::read_dataset`
//! 2. Analyze it with a `SalesAnalyzer`
//! 3. Write the ranked reports with `report_format::write_report`
//!
//! Fatal errors stop the run. Data inconsistencies inside the dataset are
//! tolerated by the analyzer and only show up in the logs.

use crate::cli::OutputFormat;
use crate::core::{AnalysisConfig, SalesAnalyzer, StrategyBundle};
use crate::io::json_reader::read_dataset;
use crate::io::report_format::write_report;
use crate::types::AnalysisError;
use std::io::Write;
use std::path::Path;

/// Settings for a single pipeline run
#[derive(Debug)]
pub struct Pipeline {
    analyzer: SalesAnalyzer,
    options: StrategyBundle,
    format: OutputFormat,
}

impl Pipeline {
    pub fn new(config: AnalysisConfig, options: StrategyBundle, format: OutputFormat) -> Self {
        Pipeline {
            analyzer: SalesAnalyzer::new(config),
            options,
            format,
        }
    }

    /// Analyze the dataset at `input_path` and write the report to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened or parsed
    /// - The dataset or strategy bundle fails validation
    /// - The report cannot be written
    pub fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), AnalysisError> {
        let data = read_dataset(input_path)?;
        let outcome = self.analyzer.analyze_detailed(&data, &self.options)?;

        tracing::info!(
            sellers = outcome.stats.len(),
            records_processed = outcome.summary.records_processed,
            records_skipped = outcome.summary.records_skipped,
            items_skipped = outcome.summary.items_skipped,
            "Analysis complete"
        );

        write_report(&outcome.reports(), self.format, output)
    }
}
