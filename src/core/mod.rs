//! Core business logic module
//!
//! This module contains the aggregation stages and their orchestration:
//! - `traits` - Revenue and bonus strategy seams
//! - `options` - Strategy bundle and analysis configuration
//! - `validator` - Precondition checks on dataset and options
//! - `indexer` - Seller and product lookup structures
//! - `accumulator` - Per-seller revenue, profit and product mix totals
//! - `ranker` - Profit ranking, bonus assignment, top products
//! - `engine` - Stage orchestration

pub mod accumulator;
pub mod engine;
pub mod indexer;
pub mod options;
pub mod ranker;
pub mod traits;
pub mod validator;

pub use accumulator::AccumulationSummary;
pub use engine::{analyze_sales_data, AnalysisOutcome, SalesAnalyzer};
pub use options::{AnalysisConfig, StrategyBundle, DEFAULT_TOP_PRODUCTS_LIMIT};
pub use traits::{BonusCalculator, RevenueCalculator};
