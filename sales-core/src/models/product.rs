use super::Sku;
use rust_decimal::Decimal;

/// A product in the catalog, keyed by its sku.
///
/// Only the cost basis matters for reporting: profit on a line item is its
/// revenue less `purchase_price × quantity`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Stock keeping unit, referenced by order items
    pub sku: Sku,
    /// The unit cost paid for the product. Must be non-negative.
    pub purchase_price: Decimal,
}
