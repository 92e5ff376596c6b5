//! Strategy bundle and analysis configuration
//!
//! `StrategyBundle` carries the injected revenue and bonus calculators.
//! Either may be left out while building; the validator rejects an
//! incomplete bundle before any processing starts.

use crate::core::traits::{BonusCalculator, RevenueCalculator};
use std::fmt;

/// Default number of entries kept in each seller's top product list
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// Caller-supplied revenue and bonus strategies
///
/// # Examples
///
/// ```
/// use sales_analytics::core::StrategyBundle;
/// use sales_analytics::types::{LineItem, Product, SellerStats};
///
/// let options = StrategyBundle::new()
///     .with_revenue(|item: &LineItem, _product: &Product| {
///         item.sale_price * f64::from(item.quantity)
///     })
///     .with_bonus(|_index: usize, _total: usize, seller: &SellerStats| seller.profit * 0.1);
///
/// assert!(options.revenue_calculator().is_some());
/// assert!(options.bonus_calculator().is_some());
/// ```
#[derive(Default)]
pub struct StrategyBundle {
    calculate_revenue: Option<Box<dyn RevenueCalculator>>,
    calculate_bonus: Option<Box<dyn BonusCalculator>>,
}

impl StrategyBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the revenue calculator
    pub fn with_revenue<R>(mut self, calculator: R) -> Self
    where
        R: RevenueCalculator + 'static,
    {
        self.calculate_revenue = Some(Box::new(calculator));
        self
    }

    /// Set the bonus calculator
    pub fn with_bonus<B>(mut self, calculator: B) -> Self
    where
        B: BonusCalculator + 'static,
    {
        self.calculate_bonus = Some(Box::new(calculator));
        self
    }

    pub fn revenue_calculator(&self) -> Option<&dyn RevenueCalculator> {
        self.calculate_revenue.as_deref()
    }

    pub fn bonus_calculator(&self) -> Option<&dyn BonusCalculator> {
        self.calculate_bonus.as_deref()
    }
}

impl fmt::Debug for StrategyBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyBundle")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}

/// Tunables for a single analysis run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Maximum number of entries in each seller's top product list
    pub top_products_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Create a config with a custom top product limit
    ///
    /// A limit of zero would empty every list, so it falls back to the
    /// default with a warning.
    pub fn new(top_products_limit: usize) -> Self {
        let top_products_limit = if top_products_limit == 0 {
            tracing::warn!(
                "Invalid top_products_limit ({}), using default ({})",
                top_products_limit,
                DEFAULT_TOP_PRODUCTS_LIMIT
            );
            DEFAULT_TOP_PRODUCTS_LIMIT
        } else {
            top_products_limit
        };

        Self { top_products_limit }
    }
}
