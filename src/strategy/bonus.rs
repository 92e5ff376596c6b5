//! Bonus strategies
//!
//! Bonuses are a share of the seller's own profit, with the share picked by
//! the seller's rank.

use crate::core::BonusCalculator;
use crate::types::SellerStats;

/// Reference tiering
///
/// | rank             | share of profit |
/// |------------------|-----------------|
/// | 0                | 15%             |
/// | 1 and 2          | 10%             |
/// | last             | 0%              |
/// | everyone else    | 5%              |
///
/// Rules are checked top to bottom, so in a two-seller ranking the last
/// seller is also rank 1 and gets 10%.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitTierBonus;

impl BonusCalculator for ProfitTierBonus {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        let share = match index {
            0 => 0.15,
            1 | 2 => 0.10,
            i if i + 1 == total => 0.0,
            _ => 0.05,
        };
        seller.profit * share
    }
}

/// Leader-weighted tiering
///
/// Rank 0 earns 10%, rank 1 earns 5%, everyone else 2% of profit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaderShareBonus;

impl BonusCalculator for LeaderShareBonus {
    fn calculate_bonus(&self, index: usize, _total: usize, seller: &SellerStats) -> f64 {
        let share = match index {
            0 => 0.10,
            1 => 0.05,
            _ => 0.02,
        };
        seller.profit * share
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn seller(profit: f64) -> SellerStats {
        let mut stats = SellerStats::new("1", "Ivan Ivanov");
        stats.profit = profit;
        stats
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[rstest]
    #[case::first(0, 4, 100.0, 15.0)]
    #[case::second(1, 4, 80.0, 8.0)]
    #[case::third(2, 4, 60.0, 6.0)]
    #[case::last(3, 4, 10.0, 0.0)]
    #[case::middle(3, 6, 40.0, 2.0)]
    #[case::two_sellers_last_is_second(1, 2, 50.0, 5.0)]
    #[case::three_sellers_last_is_third(2, 3, 50.0, 5.0)]
    #[case::single_seller(0, 1, 20.0, 3.0)]
    #[case::negative_profit(0, 4, -100.0, -15.0)]
    fn test_profit_tier_bonus(
        #[case] index: usize,
        #[case] total: usize,
        #[case] profit: f64,
        #[case] expected: f64,
    ) {
        assert_close(
            ProfitTierBonus.calculate_bonus(index, total, &seller(profit)),
            expected,
        );
    }

    #[rstest]
    #[case::first(0, 3, 100.0, 10.0)]
    #[case::second(1, 3, 100.0, 5.0)]
    #[case::rest(2, 3, 100.0, 2.0)]
    #[case::last_still_paid(9, 10, 100.0, 2.0)]
    fn test_leader_share_bonus(
        #[case] index: usize,
        #[case] total: usize,
        #[case] profit: f64,
        #[case] expected: f64,
    ) {
        assert_close(
            LeaderShareBonus.calculate_bonus(index, total, &seller(profit)),
            expected,
        );
    }
}
