//! Profit ranking, bonus assignment and top product derivation
//!
//! The ranker consumes the accumulated stats, orders sellers by profit
//! (descending, stable on ties), asks the injected bonus strategy for each
//! rank, and trims every seller's product mix down to a top-N list.
//!
//! Totals that overflowed during accumulation (infinite, or NaN from
//! `inf - inf`) are reset to zero before ranking so the sort sees a total
//! order.

use crate::core::traits::BonusCalculator;
use crate::types::{SellerReport, SellerStats, TopProduct};
use std::cmp::Ordering;

/// Rank sellers and finalize their bonus and top products
///
/// # Arguments
///
/// * `stats` - Accumulated stats in seller input order
/// * `bonus` - Injected bonus strategy, called as `(index, total, seller)`
/// * `top_products_limit` - Maximum entries per top product list
///
/// # Returns
///
/// The same stats, ordered by profit descending, with `bonus` and
/// `top_products` assigned.
pub fn rank_sellers(
    mut stats: Vec<SellerStats>,
    bonus: &dyn BonusCalculator,
    top_products_limit: usize,
) -> Vec<SellerStats> {
    for seller in stats.iter_mut() {
        zero_non_finite_totals(seller);
    }
    sort_by_profit(&mut stats);

    let total = stats.len();
    for (index, seller) in stats.iter_mut().enumerate() {
        seller.bonus = seller_bonus(bonus, index, total, seller);
        seller.top_products = top_products(seller, top_products_limit);
    }

    stats
}

/// Build the rounded report view from ranked stats
pub fn to_reports(stats: &[SellerStats]) -> Vec<SellerReport> {
    stats.iter().map(SellerReport::from).collect()
}

/// Reset overflowed revenue and profit to zero
fn zero_non_finite_totals(seller: &mut SellerStats) {
    if !seller.revenue.is_finite() || !seller.profit.is_finite() {
        tracing::warn!(
            seller_id = %seller.seller_id,
            revenue = seller.revenue,
            profit = seller.profit,
            "Seller totals are not finite, using 0"
        );
    }
    if !seller.revenue.is_finite() {
        seller.revenue = 0.0;
    }
    if !seller.profit.is_finite() {
        seller.profit = 0.0;
    }
}

/// Sort by profit descending
///
/// The sort is stable, so sellers with equal profit keep their input order.
/// Profits must already be finite; `0.0` and `-0.0` compare equal.
fn sort_by_profit(stats: &mut [SellerStats]) {
    stats.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
}

/// Bonus for one rank, with non-finite strategy output coerced to zero
fn seller_bonus(
    calculator: &dyn BonusCalculator,
    index: usize,
    total: usize,
    seller: &SellerStats,
) -> f64 {
    let bonus = calculator.calculate_bonus(index, total, seller);
    if bonus.is_finite() {
        bonus
    } else {
        tracing::warn!(
            seller_id = %seller.seller_id,
            index,
            bonus,
            "Bonus strategy returned a non-finite value, using 0"
        );
        0.0
    }
}

/// Best-selling products by quantity
///
/// Ties keep the `products_sold` iteration order (ascending SKU).
pub fn top_products(seller: &SellerStats, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = seller
        .products_sold
        .iter()
        .map(|(sku, &quantity)| TopProduct {
            sku: sku.clone(),
            quantity,
        })
        .collect();

    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(limit);
    products
}
