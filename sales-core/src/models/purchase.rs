use super::{CustomerId, ReceiptId, SellerId, Sku};
use rust_decimal::Decimal;

/// A single line within a purchase record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderItem {
    /// The product sold
    pub sku: Sku,
    /// Discount applied to the line, in percent (0 to 100)
    pub discount: Decimal,
    /// Number of units sold
    pub quantity: u32,
    /// Unit price before discount. Must be non-negative.
    pub sale_price: Decimal,
}

/// A purchase record (receipt), attributed to exactly one seller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderLine {
    /// Identifier of the receipt, used when reporting data problems
    pub receipt_id: ReceiptId,
    /// The seller credited with this sale
    pub seller_id: SellerId,
    /// The buying customer, if known
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub customer_id: Option<CustomerId>,
    /// The line items, in receipt order
    pub items: Vec<OrderItem>,
    /// A precomputed order total, if the source provides one
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub total_amount: Option<Decimal>,
}
