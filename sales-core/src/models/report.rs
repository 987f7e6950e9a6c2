use super::{ProductQuantity, SellerId};
use rust_decimal::Decimal;

/// One row of the final report.
///
/// Monetary fields are rounded to two decimal places and `top_products` is
/// ordered best-selling first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellerReport {
    /// The seller's identifier
    pub seller_id: SellerId,
    /// "First Last"
    pub name: String,
    /// Total revenue, rounded to cents
    pub revenue: Decimal,
    /// Total profit, rounded to cents
    pub profit: Decimal,
    /// Number of purchase records
    pub sales_count: u64,
    /// The best-selling products by quantity
    pub top_products: Vec<ProductQuantity>,
    /// The rank-derived bonus, rounded to cents
    pub bonus: Decimal,
}
