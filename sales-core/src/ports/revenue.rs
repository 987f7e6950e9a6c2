use crate::models::OrderItem;
use rust_decimal::Decimal;
use std::convert::Infallible;

/// Computes the revenue of a single order item.
///
/// The analysis never hardcodes a pricing rule; it asks the strategy for each
/// item's revenue and uses the same figure for both revenue and profit
/// accrual. Any error is passed through to the caller untouched.
///
/// Closures of the shape `Fn(&OrderItem) -> Decimal` are strategies too:
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_core::{models::OrderItem, ports::RevenueStrategy};
///
/// let undiscounted = |item: &OrderItem| item.sale_price * Decimal::from(item.quantity);
/// let item = OrderItem {
///     sku: "SKU_001".into(),
///     discount: Decimal::ZERO,
///     quantity: 3,
///     sale_price: Decimal::from(2),
/// };
/// assert_eq!(undiscounted.revenue(&item).unwrap(), Decimal::from(6));
/// ```
pub trait RevenueStrategy {
    /// Error type for strategy failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// The revenue earned on `item`.
    fn revenue(&self, item: &OrderItem) -> Result<Decimal, Self::Error>;
}

impl<F: Fn(&OrderItem) -> Decimal> RevenueStrategy for F {
    type Error = Infallible;

    fn revenue(&self, item: &OrderItem) -> Result<Decimal, Self::Error> {
        Ok(self(item))
    }
}
