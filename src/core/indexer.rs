//! Lookup structures built once per analysis
//!
//! The `SellerIndex` owns one zeroed `SellerStats` per seller, kept in input
//! order so the ranker can break profit ties by original position. The
//! `ProductIndex` maps SKUs to product cards for cost lookups.

use crate::types::{Product, Seller, SellerId, SellerStats};
use std::collections::HashMap;

/// Seller identifier → mutable stats record
#[derive(Debug, Default)]
pub struct SellerIndex {
    /// Stats in seller input order
    stats: Vec<SellerStats>,
    /// Position of each seller in `stats`
    positions: HashMap<SellerId, usize>,
}

impl SellerIndex {
    /// Build the index from validated sellers
    ///
    /// Each seller gets a fresh stats record with a resolved display name.
    /// Should an identifier repeat, the later seller replaces the earlier one
    /// in place.
    pub fn build(sellers: &[Seller]) -> Self {
        let mut index = SellerIndex {
            stats: Vec::with_capacity(sellers.len()),
            positions: HashMap::with_capacity(sellers.len()),
        };

        for seller in sellers {
            let stats = SellerStats::new(seller.id.clone(), seller.display_name());
            match index.positions.get(&seller.id) {
                Some(&position) => index.stats[position] = stats,
                None => {
                    index.positions.insert(seller.id.clone(), index.stats.len());
                    index.stats.push(stats);
                }
            }
        }

        index
    }

    /// Get the stats record for a seller, if the seller is known
    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerStats> {
        let position = *self.positions.get(seller_id)?;
        self.stats.get_mut(position)
    }

    pub fn get(&self, seller_id: &str) -> Option<&SellerStats> {
        let position = *self.positions.get(seller_id)?;
        self.stats.get(position)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Consume the index, yielding stats in seller input order
    pub fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}

/// SKU → product card
#[derive(Debug, Default)]
pub struct ProductIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    /// Build the index from validated products
    ///
    /// Duplicate SKUs resolve to the last product listed.
    pub fn build(products: &'a [Product]) -> Self {
        let products = products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        ProductIndex { products }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
