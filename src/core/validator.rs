//! Precondition checks run before any statistics are built
//!
//! Validation happens in two places:
//! - `validate_raw_dataset` inspects the untyped JSON document, catching a
//!   missing dataset or record sequences that are absent or not arrays
//! - `validate_dataset` and `validate_options` check the typed dataset and
//!   the strategy bundle right before aggregation
//!
//! All checks are pure and fail fast with `InvalidInput` / `InvalidOptions`.

use crate::core::options::StrategyBundle;
use crate::core::traits::{BonusCalculator, RevenueCalculator};
use crate::types::{AnalysisError, Dataset};
use serde_json::Value;
use std::collections::HashSet;

/// Names of the record sequences every dataset must carry
pub const REQUIRED_SEQUENCES: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Check the shape of a raw dataset document
///
/// # Errors
///
/// Returns `InvalidInput` if:
/// - The document is `null` or not an object
/// - Any of `sellers`, `products`, `purchase_records` is missing, not an
///   array, or an empty array
pub fn validate_raw_dataset(document: &Value) -> Result<(), AnalysisError> {
    let object = match document {
        Value::Null => return Err(AnalysisError::invalid_input("dataset is missing")),
        Value::Object(object) => object,
        _ => {
            return Err(AnalysisError::invalid_input(
                "dataset must be an object with sellers, products and purchase_records",
            ))
        }
    };

    for field in REQUIRED_SEQUENCES {
        match object.get(field) {
            None | Some(Value::Null) => {
                return Err(AnalysisError::invalid_input(format!("{} is missing", field)))
            }
            Some(Value::Array(records)) if records.is_empty() => {
                return Err(AnalysisError::invalid_input(format!(
                    "{} must not be empty",
                    field
                )))
            }
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(AnalysisError::invalid_input(format!(
                    "{} must be an array",
                    field
                )))
            }
        }
    }

    Ok(())
}

/// Check a typed dataset
///
/// # Errors
///
/// Returns `InvalidInput` if any record sequence is empty or if two sellers
/// share an identifier.
pub fn validate_dataset(data: &Dataset) -> Result<(), AnalysisError> {
    let lengths = [
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len(),
    ];

    for (field, len) in REQUIRED_SEQUENCES.iter().zip(lengths) {
        if len == 0 {
            return Err(AnalysisError::invalid_input(format!(
                "{} must not be empty",
                field
            )));
        }
    }

    let mut seen = HashSet::with_capacity(data.sellers.len());
    for seller in &data.sellers {
        if !seen.insert(seller.id.as_str()) {
            return Err(AnalysisError::invalid_input(format!(
                "duplicate seller id '{}'",
                seller.id
            )));
        }
    }

    Ok(())
}

/// Check that both required strategies are present
///
/// # Returns
///
/// The revenue and bonus calculators, ready to be handed to the later stages.
///
/// # Errors
///
/// Returns `InvalidOptions` naming the first missing strategy.
pub fn validate_options(
    options: &StrategyBundle,
) -> Result<(&dyn RevenueCalculator, &dyn BonusCalculator), AnalysisError> {
    let revenue = options
        .revenue_calculator()
        .ok_or_else(|| AnalysisError::invalid_options("calculate_revenue is required"))?;
    let bonus = options
        .bonus_calculator()
        .ok_or_else(|| AnalysisError::invalid_options("calculate_bonus is required"))?;

    Ok((revenue, bonus))
}
