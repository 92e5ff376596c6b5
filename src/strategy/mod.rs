//! Concrete revenue and bonus strategies
//!
//! The aggregation core only knows the `RevenueCalculator` and
//! `BonusCalculator` traits. This module ships the business formulas that plug
//! into them, plus a factory that assembles a `StrategyBundle` from the names
//! selected on the command line.

use crate::cli::{BonusStrategyType, RevenueStrategyType};
use crate::core::StrategyBundle;

pub mod bonus;
pub mod revenue;

pub use bonus::{LeaderShareBonus, ProfitTierBonus};
pub use revenue::{RetailPriceRevenue, SalePriceRevenue};

/// Create a strategy bundle from the selected strategy types
///
/// # Arguments
///
/// * `revenue` - Which revenue formula to use
/// * `bonus` - Which bonus tiering to use
///
/// # Returns
///
/// A complete `StrategyBundle` that always passes option validation
pub fn create_strategies(
    revenue: RevenueStrategyType,
    bonus: BonusStrategyType,
) -> StrategyBundle {
    let bundle = match revenue {
        RevenueStrategyType::SalePrice => StrategyBundle::new().with_revenue(SalePriceRevenue),
        RevenueStrategyType::RetailPrice => StrategyBundle::new().with_revenue(RetailPriceRevenue),
    };

    match bonus {
        BonusStrategyType::ProfitTier => bundle.with_bonus(ProfitTierBonus),
        BonusStrategyType::LeaderShare => bundle.with_bonus(LeaderShareBonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::validate_options;
    use crate::types::{LineItem, Product, SellerStats};
    use rstest::rstest;

    #[rstest]
    #[case::sale_profit(RevenueStrategyType::SalePrice, BonusStrategyType::ProfitTier, 40.0, 15.0)]
    #[case::sale_leader(RevenueStrategyType::SalePrice, BonusStrategyType::LeaderShare, 40.0, 10.0)]
    #[case::retail_profit(RevenueStrategyType::RetailPrice, BonusStrategyType::ProfitTier, 60.0, 15.0)]
    #[case::retail_leader(RevenueStrategyType::RetailPrice, BonusStrategyType::LeaderShare, 60.0, 10.0)]
    fn test_create_strategies(
        #[case] revenue_type: RevenueStrategyType,
        #[case] bonus_type: BonusStrategyType,
        #[case] expected_revenue: f64,
        #[case] expected_bonus: f64,
    ) {
        let bundle = create_strategies(revenue_type, bonus_type);
        let (revenue, bonus) = validate_options(&bundle).unwrap();

        let item = LineItem::new("A", 2, 20.0, 0.0);
        let product = Product {
            sku: "A".to_string(),
            purchase_price: 10.0,
            retail_price: Some(30.0),
        };
        let mut seller = SellerStats::new("1", "Ivan Ivanov");
        seller.profit = 100.0;

        assert_eq!(revenue.calculate_revenue(&item, &product), expected_revenue);
        let actual_bonus = bonus.calculate_bonus(0, 3, &seller);
        assert!((actual_bonus - expected_bonus).abs() < 1e-9);
    }
}
