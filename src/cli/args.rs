use crate::core::AnalysisConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute per-seller sales statistics and bonuses
#[derive(Parser, Debug)]
#[command(name = "sales-analytics")]
#[command(about = "Compute per-seller sales statistics and bonuses", long_about = None)]
pub struct CliArgs {
    /// Input JSON file with sellers, products and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input JSON dataset")]
    pub input_file: PathBuf,

    /// Revenue formula applied to every line item
    #[arg(
        long = "revenue",
        value_name = "STRATEGY",
        default_value = "sale-price",
        help = "Revenue strategy: 'sale-price' or 'retail-price'"
    )]
    pub revenue: RevenueStrategyType,

    /// Bonus tiering applied by profit rank
    #[arg(
        long = "bonus",
        value_name = "STRATEGY",
        default_value = "profit-tier",
        help = "Bonus strategy: 'profit-tier' or 'leader-share'"
    )]
    pub bonus: BonusStrategyType,

    /// Maximum entries in each seller's top product list
    #[arg(
        long = "top-products",
        value_name = "COUNT",
        help = "Number of top products kept per seller (default: 10)"
    )]
    pub top_products: Option<usize>,

    /// Report output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Output format: 'json' or 'csv'"
    )]
    pub format: OutputFormat,
}

/// Available revenue formulas
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RevenueStrategyType {
    SalePrice,
    RetailPrice,
}

/// Available bonus tierings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BonusStrategyType {
    ProfitTier,
    LeaderShare,
}

/// Available report formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl CliArgs {
    /// Create an AnalysisConfig from CLI arguments
    ///
    /// Falls back to the defaults when no limit was given. Invalid values are
    /// handled (and warned about) by `AnalysisConfig::new`.
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        match self.top_products {
            Some(limit) => AnalysisConfig::new(limit),
            None => AnalysisConfig::default(),
        }
    }
}
