//! Strategy traits injected into the aggregation core
//!
//! The core never hardcodes a revenue or bonus formula. Callers supply them as
//! implementations of these traits (or as plain closures, which implement the
//! traits through the blanket impls below).

use crate::types::{LineItem, Product, SellerStats};

/// Computes the revenue of a single line item
///
/// The calculator owns the discount formula. The core only consumes the
/// returned value; non-finite results are treated as zero revenue.
pub trait RevenueCalculator: Send + Sync {
    /// Revenue for `item`, given the resolved `product` card
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> f64;
}

/// Computes a seller's bonus from their rank
///
/// Arguments are passed in this order:
/// - `index`: zero-based rank after sorting by profit descending
/// - `total`: number of ranked sellers
/// - `seller`: the seller's accumulated statistics
///
/// Non-finite results are treated as a zero bonus.
pub trait BonusCalculator: Send + Sync {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&LineItem, &Product) -> f64 + Send + Sync,
{
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStats) -> f64 + Send + Sync,
{
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        self(index, total, seller)
    }
}
