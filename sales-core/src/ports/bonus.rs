use crate::models::SellerStats;
use rust_decimal::Decimal;
use std::convert::Infallible;

/// Computes a seller's bonus from their standing in the profit ranking.
///
/// `index` is the 0-based position in the ranking (0 is the most profitable
/// seller) and `total` is the number of ranked sellers. The stats passed in
/// are unrounded; the returned amount is rounded to cents by the report.
///
/// Closures of the shape `Fn(usize, usize, &SellerStats) -> Decimal` are
/// strategies too.
pub trait BonusStrategy {
    /// Error type for strategy failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// The bonus owed to the seller at `index` of `total`.
    fn bonus(&self, index: usize, total: usize, stats: &SellerStats)
    -> Result<Decimal, Self::Error>;
}

impl<F: Fn(usize, usize, &SellerStats) -> Decimal> BonusStrategy for F {
    type Error = Infallible;

    fn bonus(
        &self,
        index: usize,
        total: usize,
        stats: &SellerStats,
    ) -> Result<Decimal, Self::Error> {
        Ok(self(index, total, stats))
    }
}
