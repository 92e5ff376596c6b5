//! Revenue strategies
//!
//! Both strategies apply the line item's discount as a percentage of the gross
//! amount: `net = unit_price × quantity × (1 − discount / 100)`. They differ in
//! which unit price they start from.

use crate::core::RevenueCalculator;
use crate::types::{LineItem, Product};

/// Revenue from the price actually charged on the receipt
///
/// This is the default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalePriceRevenue;

impl RevenueCalculator for SalePriceRevenue {
    fn calculate_revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        discounted(item.sale_price, item)
    }
}

/// Revenue from the catalogue's retail price
///
/// Products without a retail price fall back to the receipt's sale price.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetailPriceRevenue;

impl RevenueCalculator for RetailPriceRevenue {
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> f64 {
        let unit_price = product.retail_price.unwrap_or(item.sale_price);
        discounted(unit_price, item)
    }
}

fn discounted(unit_price: f64, item: &LineItem) -> f64 {
    let gross = unit_price * f64::from(item.quantity);
    gross * (1.0 - item.discount / 100.0)
}
