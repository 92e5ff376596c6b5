//! Report output formats
//!
//! Serializes ranked seller reports as either pretty-printed JSON or CSV.
//! Rows are written in the order given, which is the profit ranking.

use crate::cli::OutputFormat;
use crate::types::{AnalysisError, SellerReport, TopProduct};
use std::io::Write;

/// CSV header row
pub const CSV_HEADER: [&str; 7] = [
    "seller_id",
    "name",
    "revenue",
    "profit",
    "sales_count",
    "bonus",
    "top_products",
];

/// Write reports in the requested format
pub fn write_report(
    reports: &[SellerReport],
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    match format {
        OutputFormat::Json => write_report_json(reports, output),
        OutputFormat::Csv => write_report_csv(reports, output),
    }
}

/// Write reports as a pretty-printed JSON array followed by a newline
pub fn write_report_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(&mut *output, reports)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Write reports in CSV format
///
/// Money columns carry exactly two decimals. Top products are packed into a
/// single column as `SKU:QUANTITY` pairs separated by `;`.
pub fn write_report_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for report in reports {
        writer.write_record([
            report.seller_id.clone(),
            report.name.clone(),
            format!("{:.2}", report.revenue),
            format!("{:.2}", report.profit),
            report.sales_count.to_string(),
            format!("{:.2}", report.bonus),
            format_top_products(&report.top_products),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Pack a top product list into a single CSV field
pub fn format_top_products(products: &[TopProduct]) -> String {
    products
        .iter()
        .map(|product| format!("{}:{}", product.sku, product.quantity))
        .collect::<Vec<_>>()
        .join(";")
}
