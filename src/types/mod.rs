//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `dataset`: Raw input records (sellers, products, purchase records)
//! - `stats`: Per-seller working statistics and the report view
//! - `error`: Error types for the analytics engine

pub mod dataset;
pub mod error;
pub mod stats;

pub use dataset::{Dataset, LineItem, Product, PurchaseRecord, Seller, SellerId, Sku};
pub use error::AnalysisError;
pub use stats::{round_money, SellerReport, SellerStats, TopProduct};
