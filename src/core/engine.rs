//! Sales analysis engine
//!
//! This module provides the `SalesAnalyzer` that orchestrates one analysis run
//! by wiring the stages in sequence:
//!
//! ```text
//! Validator → Indexer → Accumulator → Ranker → report view
//! ```
//!
//! Each run builds fresh indices and stats, so a single analyzer can be reused
//! for any number of datasets and repeated runs over the same data produce
//! identical reports.

use crate::core::accumulator::{AccumulationSummary, Accumulator};
use crate::core::indexer::{ProductIndex, SellerIndex};
use crate::core::options::{AnalysisConfig, StrategyBundle};
use crate::core::ranker::{rank_sellers, to_reports};
use crate::core::validator::{validate_dataset, validate_options};
use crate::types::{AnalysisError, Dataset, SellerReport, SellerStats};

/// Result of a full analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// Finalized stats, ordered by profit descending
    pub stats: Vec<SellerStats>,
    /// What the accumulator consumed and skipped
    pub summary: AccumulationSummary,
}

impl AnalysisOutcome {
    /// Rounded report rows in ranking order
    pub fn reports(&self) -> Vec<SellerReport> {
        to_reports(&self.stats)
    }
}

/// Sales analysis engine
///
/// Holds only configuration; all per-run state lives inside `analyze`.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalyzer {
    config: AnalysisConfig,
}

impl SalesAnalyzer {
    /// Create a new SalesAnalyzer
    ///
    /// # Arguments
    ///
    /// * `config` - Tunables such as the top product limit
    pub fn new(config: AnalysisConfig) -> Self {
        SalesAnalyzer { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a dataset and return the report rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty record sequence or duplicate seller
    /// ids, and `InvalidOptions` when a required strategy is missing. Both are
    /// raised before any statistics are built.
    pub fn analyze(
        &self,
        data: &Dataset,
        options: &StrategyBundle,
    ) -> Result<Vec<SellerReport>, AnalysisError> {
        Ok(self.analyze_detailed(data, options)?.reports())
    }

    /// Analyze a dataset, keeping full-precision stats and skip counters
    ///
    /// # Errors
    ///
    /// Same as [`SalesAnalyzer::analyze`].
    pub fn analyze_detailed(
        &self,
        data: &Dataset,
        options: &StrategyBundle,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        validate_dataset(data)?;
        let (revenue, bonus) = validate_options(options)?;

        let mut sellers = SellerIndex::build(&data.sellers);
        let products = ProductIndex::build(&data.products);

        let summary = Accumulator::new(&mut sellers, &products, revenue).run(&data.purchase_records);
        tracing::debug!(
            records_processed = summary.records_processed,
            records_skipped = summary.records_skipped,
            items_processed = summary.items_processed,
            items_skipped = summary.items_skipped,
            "Accumulated purchase records"
        );

        let stats = rank_sellers(sellers.into_stats(), bonus, self.config.top_products_limit);

        Ok(AnalysisOutcome { stats, summary })
    }
}

/// Analyze a dataset with the default configuration
///
/// Convenience wrapper around [`SalesAnalyzer::analyze`].
///
/// # Examples
///
/// ```
/// use sales_analytics::core::{analyze_sales_data, StrategyBundle};
/// use sales_analytics::strategy::{ProfitTierBonus, SalePriceRevenue};
/// use sales_analytics::types::{Dataset, LineItem, Product, PurchaseRecord, Seller};
///
/// let data = Dataset {
///     sellers: vec![Seller::new("1", "Ivan", "Ivanov")],
///     products: vec![Product::new("A", 10.0)],
///     purchase_records: vec![PurchaseRecord::new("1", vec![LineItem::new("A", 2, 20.0, 0.0)])],
/// };
/// let options = StrategyBundle::new()
///     .with_revenue(SalePriceRevenue)
///     .with_bonus(ProfitTierBonus);
///
/// let report = analyze_sales_data(&data, &options).unwrap();
/// assert_eq!(format!("{:.2}", report[0].revenue), "40.00");
/// assert_eq!(format!("{:.2}", report[0].profit), "20.00");
/// ```
pub fn analyze_sales_data(
    data: &Dataset,
    options: &StrategyBundle,
) -> Result<Vec<SellerReport>, AnalysisError> {
    SalesAnalyzer::default().analyze(data, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{ProfitTierBonus, SalePriceRevenue};
    use crate::types::{LineItem, Product, PurchaseRecord, Seller, TopProduct};
    use rust_decimal::Decimal;

    fn options() -> StrategyBundle {
        StrategyBundle::new()
            .with_revenue(SalePriceRevenue)
            .with_bonus(ProfitTierBonus)
    }

    fn single_sale_dataset() -> Dataset {
        Dataset {
            sellers: vec![Seller::new("1", "Ivan", "Ivanov")],
            products: vec![Product::new("A", 10.0)],
            purchase_records: vec![PurchaseRecord::new(
                "1",
                vec![LineItem::new("A", 2, 20.0, 0.0)],
            )],
        }
    }

    /// Four sellers whose profits come out as 100, 80, 60 and 10
    fn four_seller_dataset() -> Dataset {
        Dataset {
            sellers: vec![
                Seller::new("s10", "Low", "Seller"),
                Seller::new("s80", "Second", "Seller"),
                Seller::new("s100", "Top", "Seller"),
                Seller::new("s60", "Third", "Seller"),
            ],
            products: vec![Product::new("P", 0.0)],
            purchase_records: vec![
                PurchaseRecord::new("s100", vec![LineItem::new("P", 1, 100.0, 0.0)]),
                PurchaseRecord::new("s80", vec![LineItem::new("P", 1, 80.0, 0.0)]),
                PurchaseRecord::new("s60", vec![LineItem::new("P", 1, 60.0, 0.0)]),
                PurchaseRecord::new("s10", vec![LineItem::new("P", 1, 10.0, 0.0)]),
            ],
        }
    }

    #[test]
    fn test_single_sale_report() {
        let report = analyze_sales_data(&single_sale_dataset(), &options()).unwrap();

        assert_eq!(report.len(), 1);
        let seller = &report[0];
        assert_eq!(seller.seller_id, "1");
        assert_eq!(seller.name, "Ivan Ivanov");
        assert_eq!(seller.revenue, Decimal::new(40, 0));
        assert_eq!(seller.profit, Decimal::new(20, 0));
        assert_eq!(seller.sales_count, 1);
        assert_eq!(
            seller.top_products,
            vec![TopProduct {
                sku: "A".to_string(),
                quantity: 2
            }]
        );
        // a single seller is both rank 0 and the last rank; rank 0 wins
        assert_eq!(seller.bonus, Decimal::new(3, 0));
    }

    #[test]
    fn test_reference_bonus_tiers() {
        let report = analyze_sales_data(&four_seller_dataset(), &options()).unwrap();

        let ids: Vec<&str> = report.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["s100", "s80", "s60", "s10"]);

        let bonuses: Vec<Decimal> = report.iter().map(|r| r.bonus).collect();
        assert_eq!(
            bonuses,
            vec![
                Decimal::new(15, 0),
                Decimal::new(8, 0),
                Decimal::new(6, 0),
                Decimal::ZERO
            ]
        );
    }

    #[test]
    fn test_inactive_sellers_are_reported_with_zero_stats() {
        let mut data = single_sale_dataset();
        data.sellers.push(Seller::with_name("2", "Idle Seller"));

        let report = analyze_sales_data(&data, &options()).unwrap();

        assert_eq!(report.len(), 2);
        let idle = &report[1];
        assert_eq!(idle.seller_id, "2");
        assert_eq!(idle.revenue, Decimal::ZERO);
        assert_eq!(idle.profit, Decimal::ZERO);
        assert_eq!(idle.sales_count, 0);
        assert!(idle.top_products.is_empty());
        assert_eq!(idle.bonus, Decimal::ZERO);
    }

    #[test]
    fn test_empty_sellers_is_invalid_input() {
        let data = Dataset {
            sellers: vec![],
            ..single_sale_dataset()
        };

        let error = analyze_sales_data(&data, &options()).unwrap_err();
        assert!(matches!(error, AnalysisError::InvalidInput { .. }));
    }

    #[test]
    fn test_missing_bonus_is_invalid_options() {
        let options = StrategyBundle::new().with_revenue(SalePriceRevenue);

        let error = analyze_sales_data(&single_sale_dataset(), &options).unwrap_err();
        assert!(matches!(error, AnalysisError::InvalidOptions { .. }));
    }

    #[test]
    fn test_input_errors_win_over_option_errors() {
        let data = Dataset {
            products: vec![],
            ..single_sale_dataset()
        };

        let error = analyze_sales_data(&data, &StrategyBundle::new()).unwrap_err();
        assert!(matches!(error, AnalysisError::InvalidInput { .. }));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let analyzer = SalesAnalyzer::default();
        let data = four_seller_dataset();
        let options = options();

        let first = analyzer.analyze(&data, &options).unwrap();
        let second = analyzer.analyze(&data, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overflowed_totals_do_not_break_ranking() {
        let data = Dataset {
            sellers: vec![
                Seller::with_name("low", "Low Seller"),
                Seller::with_name("huge", "Huge Seller"),
                Seller::with_name("high", "High Seller"),
            ],
            products: vec![Product::new("FREE", 0.0), Product::new("COSTLY", 1e308)],
            purchase_records: vec![
                PurchaseRecord::new("low", vec![LineItem::new("FREE", 1, 50.0, 0.0)]),
                // revenue overflows to +inf, then an infinite cost turns profit into NaN
                PurchaseRecord::new(
                    "huge",
                    vec![
                        LineItem::new("FREE", 1, 1e308, 0.0),
                        LineItem::new("FREE", 1, 1e308, 0.0),
                        LineItem::new("COSTLY", 2, 0.0, 0.0),
                    ],
                ),
                PurchaseRecord::new("high", vec![LineItem::new("FREE", 1, 100.0, 0.0)]),
            ],
        };

        let report = analyze_sales_data(&data, &options()).unwrap();

        let ids: Vec<&str> = report.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low", "huge"]);
        assert!(report.windows(2).all(|w| w[0].profit >= w[1].profit));
        assert_eq!(report[0].bonus, Decimal::new(15, 0));
        assert_eq!(report[1].bonus, Decimal::new(5, 0));
        assert_eq!(report[2].revenue, Decimal::ZERO);
        assert_eq!(report[2].profit, Decimal::ZERO);
        assert_eq!(report[2].bonus, Decimal::ZERO);
    }

    #[test]
    fn test_detailed_outcome_reports_skips() {
        let mut data = single_sale_dataset();
        data.purchase_records.push(PurchaseRecord::new(
            "ghost",
            vec![LineItem::new("A", 1, 1.0, 0.0)],
        ));
        data.purchase_records.push(PurchaseRecord::new(
            "1",
            vec![
                LineItem::new("nope", 1, 1.0, 0.0),
                LineItem::new("A", 1, 20.0, 0.0),
            ],
        ));

        let outcome = SalesAnalyzer::default()
            .analyze_detailed(&data, &options())
            .unwrap();

        assert_eq!(outcome.summary.records_processed, 2);
        assert_eq!(outcome.summary.records_skipped, 1);
        assert_eq!(outcome.summary.items_processed, 2);
        assert_eq!(outcome.summary.items_skipped, 1);
        assert_eq!(outcome.stats[0].sales_count, 2);
        assert_eq!(outcome.stats[0].revenue, 60.0);
    }

    #[test]
    fn test_custom_top_products_limit() {
        let data = Dataset {
            sellers: vec![Seller::new("1", "Ivan", "Ivanov")],
            products: vec![
                Product::new("A", 1.0),
                Product::new("B", 1.0),
                Product::new("C", 1.0),
            ],
            purchase_records: vec![PurchaseRecord::new(
                "1",
                vec![
                    LineItem::new("A", 1, 2.0, 0.0),
                    LineItem::new("B", 3, 2.0, 0.0),
                    LineItem::new("C", 2, 2.0, 0.0),
                ],
            )],
        };

        let analyzer = SalesAnalyzer::new(AnalysisConfig::new(2));
        let report = analyzer.analyze(&data, &options()).unwrap();

        let skus: Vec<&str> = report[0]
            .top_products
            .iter()
            .map(|p| p.sku.as_str())
            .collect();
        assert_eq!(skus, vec!["B", "C"]);
    }
}
