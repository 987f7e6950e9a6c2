use super::{Seller, Sku};
use rust_decimal::Decimal;

/// The number of units of one product a seller sold.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductQuantity {
    /// The product
    pub sku: Sku,
    /// Units sold across all of the seller's purchases
    pub quantity: u64,
}

/// Aggregated, unrounded statistics for one seller.
///
/// This is the frozen result of the aggregation pass: the totals are final
/// and `products_sold` lists every product the seller sold, in order of first
/// occurrence. Ranking and rounding happen afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellerStats {
    /// The seller these statistics belong to
    pub seller: Seller,
    /// Total revenue
    pub revenue: Decimal,
    /// Total revenue less cost basis
    pub profit: Decimal,
    /// Number of purchase records (not items) attributed to the seller
    pub sales_count: u64,
    /// Units sold per product
    pub products_sold: Vec<ProductQuantity>,
}
