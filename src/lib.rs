//! Sales Analytics Library
//! # Overview
//!
//! This library computes per-seller sales performance statistics (revenue,
//! profit, product mix, rank-based bonus) from sellers, products and purchase
//! records in a single in-memory pass.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Input records, per-seller stats, report view, errors
//! - [`core`] - The aggregation pipeline:
//!   - [`core::validator`] - Precondition checks on dataset and strategies
//!   - [`core::indexer`] - Seller and product lookup structures
//!   - [`core::accumulator`] - Revenue, profit and quantity totals per seller
//!   - [`core::ranker`] - Profit ranking, bonuses, top products
//!   - [`core::engine`] - Stage orchestration
//! - [`strategy`] - Concrete revenue and bonus formulas
//! - [`io`] - JSON dataset loading and report output
//! - [`pipeline`] - File-in, report-out orchestration for the CLI
//! - [`cli`] - CLI arguments parsing
//!
//! # Strategies
//!
//! The core never hardcodes business formulas. Callers inject:
//!
//! - a **revenue calculator** `(item, product) -> f64`, which owns the
//!   discount formula
//! - a **bonus calculator** `(index, total, seller) -> f64`, called once per
//!   seller in ranking order
//!
//! # Dirty Data
//!
//! Purchase records for unknown sellers and line items for unknown SKUs are
//! skipped. Non-finite strategy output is treated as zero. Only a malformed
//! dataset or an incomplete strategy bundle is an error.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod strategy;
pub mod types;

pub use crate::core::{analyze_sales_data, AnalysisConfig, SalesAnalyzer, StrategyBundle};
pub use io::{read_dataset, write_report};
pub use pipeline::Pipeline;
pub use types::{
    AnalysisError, Dataset, LineItem, Product, PurchaseRecord, Seller, SellerReport, SellerStats,
    TopProduct,
};
