//! Per-seller accumulation over purchase records
//!
//! Walks every purchase record in input order and folds its line items into
//! the owning seller's running totals. Dirty data is tolerated rather than
//! rejected:
//! - records for unknown sellers are skipped whole
//! - line items for unknown SKUs are skipped individually
//! - non-finite revenue from the injected strategy counts as zero

use crate::core::indexer::{ProductIndex, SellerIndex};
use crate::core::traits::RevenueCalculator;
use crate::types::{LineItem, Product, PurchaseRecord, SellerStats};

/// Counters describing what the accumulator consumed and skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationSummary {
    /// Purchase records attributed to a known seller
    pub records_processed: usize,
    /// Purchase records dropped because their seller is unknown
    pub records_skipped: usize,
    /// Line items folded into seller totals
    pub items_processed: usize,
    /// Line items dropped because their SKU is unknown
    pub items_skipped: usize,
}

/// Folds purchase records into seller statistics
pub struct Accumulator<'a> {
    sellers: &'a mut SellerIndex,
    products: &'a ProductIndex<'a>,
    revenue: &'a dyn RevenueCalculator,
    summary: AccumulationSummary,
}

impl<'a> Accumulator<'a> {
    pub fn new(
        sellers: &'a mut SellerIndex,
        products: &'a ProductIndex<'a>,
        revenue: &'a dyn RevenueCalculator,
    ) -> Self {
        Accumulator {
            sellers,
            products,
            revenue,
            summary: AccumulationSummary::default(),
        }
    }

    /// Process every record in order and report what was consumed
    pub fn run(mut self, records: &[PurchaseRecord]) -> AccumulationSummary {
        for record in records {
            self.process_record(record);
        }
        self.summary
    }

    /// Process a single purchase record
    ///
    /// An unknown seller leaves every total untouched. Otherwise the seller's
    /// sales count goes up by one regardless of how many items the record
    /// carries, and each item with a known SKU is folded in.
    pub fn process_record(&mut self, record: &PurchaseRecord) {
        let Some(seller) = self.sellers.get_mut(&record.seller_id) else {
            tracing::debug!(
                seller_id = %record.seller_id,
                "Skipping purchase record for unknown seller"
            );
            self.summary.records_skipped += 1;
            return;
        };

        seller.sales_count += 1;
        self.summary.records_processed += 1;

        for item in &record.items {
            let Some(product) = self.products.get(&item.sku) else {
                tracing::debug!(
                    seller_id = %record.seller_id,
                    sku = %item.sku,
                    "Skipping line item for unknown product"
                );
                self.summary.items_skipped += 1;
                continue;
            };

            let revenue = item_revenue(self.revenue, item, product);
            apply_item(seller, item, product, revenue);
            self.summary.items_processed += 1;
        }
    }
}

/// Revenue for one item, with non-finite strategy output coerced to zero
fn item_revenue(calculator: &dyn RevenueCalculator, item: &LineItem, product: &Product) -> f64 {
    let revenue = calculator.calculate_revenue(item, product);
    if revenue.is_finite() {
        revenue
    } else {
        tracing::warn!(
            sku = %item.sku,
            revenue,
            "Revenue strategy returned a non-finite value, counting it as 0"
        );
        0.0
    }
}

/// Add one item's revenue, profit and quantity to the seller's totals
fn apply_item(seller: &mut SellerStats, item: &LineItem, product: &Product, revenue: f64) {
    let quantity = f64::from(item.quantity);
    let cost = product.purchase_price * quantity;

    seller.revenue += revenue;
    seller.profit += revenue - cost;
    *seller
        .products_sold
        .entry(item.sku.clone())
        .or_insert(0) += u64::from(item.quantity);
}
