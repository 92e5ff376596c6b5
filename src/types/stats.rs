//! Derived per-seller statistics and the report view built from them
//!
//! `SellerStats` is the working record: created zeroed by the indexer,
//! mutated by the accumulator, finalized by the ranker. `SellerReport` is the
//! read-only output view with money values rounded to cents.

use super::dataset::{SellerId, Sku};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of decimal places kept for money values in reports
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Running statistics for a single seller
///
/// Money fields use full `f64` precision; rounding happens only when the
/// report view is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub seller_id: SellerId,

    /// Display name resolved at indexing time
    pub name: String,

    /// Sum of per-item revenue reported by the revenue strategy
    pub revenue: f64,

    /// Revenue minus cost of goods sold
    pub profit: f64,

    /// Number of purchase records attributed to this seller
    ///
    /// Incremented once per record, not per line item.
    pub sales_count: u64,

    /// Cumulative quantity sold per SKU
    pub products_sold: BTreeMap<Sku, u64>,

    /// Bonus assigned by the ranker
    pub bonus: f64,

    /// Best-selling products, assigned by the ranker
    pub top_products: Vec<TopProduct>,
}

impl SellerStats {
    /// Create a zeroed stats record
    ///
    /// # Returns
    ///
    /// A new SellerStats with:
    /// - revenue = profit = bonus = 0
    /// - sales_count = 0
    /// - empty products_sold and top_products
    pub fn new(seller_id: impl Into<SellerId>, name: impl Into<String>) -> Self {
        SellerStats {
            seller_id: seller_id.into(),
            name: name.into(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: BTreeMap::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }
}

/// A product and the quantity a seller sold of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// Final per-seller report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

impl From<&SellerStats> for SellerReport {
    fn from(stats: &SellerStats) -> Self {
        SellerReport {
            seller_id: stats.seller_id.clone(),
            name: stats.name.clone(),
            revenue: round_money(stats.revenue),
            profit: round_money(stats.profit),
            sales_count: stats.sales_count,
            top_products: stats.top_products.clone(),
            bonus: round_money(stats.bonus),
        }
    }
}

/// Round a money value to cents, half away from zero
///
/// Values that are not finite become zero. `Decimal` tops out near 7.9e28,
/// so finite magnitudes beyond that also become zero, with a warning. A
/// negative zero produced by rounding is normalised.
pub fn round_money(value: f64) -> Decimal {
    let decimal = match Decimal::from_f64(value) {
        Some(decimal) => decimal,
        None => {
            if value.is_finite() {
                tracing::warn!(value, "Money value exceeds the decimal range, reporting 0");
            }
            Decimal::ZERO
        }
    };
    let rounded =
        decimal.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}
