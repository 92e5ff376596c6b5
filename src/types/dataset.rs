//! Input record types for the sales analytics engine
//!
//! This module defines the three raw record sets an analysis consumes
//! (sellers, products, purchase records) and the `Dataset` that bundles them.
//! All of them are immutable source records: the engine only reads them.
//!
//! Deserialization is deliberately lenient where real exports are messy:
//! identifiers may arrive as JSON strings or integers, and discounts that are
//! absent or non-numeric default to zero.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Seller identifier
///
/// Numeric identifiers in the input are normalised to their decimal string
/// form, so `1` and `"1"` name the same seller. A purchase record with
/// `"seller_id": "1"` is attributed to the seller with `"id": 1`, and a
/// dataset listing both `{"id": 1}` and `{"id": "1"}` has a duplicate seller.
pub type SellerId = String;

/// Stock-keeping unit, the unique product identifier
pub type Sku = String;

/// A seller as supplied in the input dataset
///
/// Sellers carry either a first and last name or a single pre-joined `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller identifier
    #[serde(deserialize_with = "deserialize_key")]
    pub id: SellerId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Pre-joined display name, used as-is when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Seller {
    /// Create a seller from first and last name
    pub fn new(id: impl Into<SellerId>, first_name: &str, last_name: &str) -> Self {
        Seller {
            id: id.into(),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            name: None,
        }
    }

    /// Create a seller from a single pre-joined display name
    pub fn with_name(id: impl Into<SellerId>, name: &str) -> Self {
        Seller {
            id: id.into(),
            first_name: None,
            last_name: None,
            name: Some(name.to_string()),
        }
    }

    /// Name shown in reports
    ///
    /// The pre-joined `name` wins when present. Otherwise first and last name
    /// are joined with a single space, skipping whichever part is missing.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product key
    #[serde(deserialize_with = "deserialize_key")]
    pub sku: Sku,

    /// Cost basis per unit
    pub purchase_price: f64,

    /// List price per unit, if the catalogue carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,
}

impl Product {
    pub fn new(sku: impl Into<Sku>, purchase_price: f64) -> Self {
        Product {
            sku: sku.into(),
            purchase_price,
            retail_price: None,
        }
    }
}

/// One product line within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(deserialize_with = "deserialize_key")]
    pub sku: Sku,

    /// Units sold
    pub quantity: u32,

    /// Unit price actually charged
    pub sale_price: f64,

    /// Discount percentage in the 0-100 range
    ///
    /// Absent, null and non-numeric values all become 0.
    #[serde(default, deserialize_with = "deserialize_discount")]
    pub discount: f64,
}

impl LineItem {
    pub fn new(sku: impl Into<Sku>, quantity: u32, sale_price: f64, discount: f64) -> Self {
        LineItem {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }
}

/// A single purchase (receipt) attributed to a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(deserialize_with = "deserialize_key")]
    pub seller_id: SellerId,

    /// Line items in receipt order
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<SellerId>, items: Vec<LineItem>) -> Self {
        PurchaseRecord {
            seller_id: seller_id.into(),
            items,
        }
    }
}

/// The complete input of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// Identifier as it may appear in the input
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Integer(i64),
}

/// Discount as it may appear in the input
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDiscount {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Text(text) => text,
        RawKey::Integer(number) => number.to_string(),
    })
}

fn deserialize_discount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawDiscount::deserialize(deserializer)? {
        RawDiscount::Number(number) => number,
        RawDiscount::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        RawDiscount::Other(_) => 0.0,
    };

    Ok(if value.is_finite() { value } else { 0.0 })
}
