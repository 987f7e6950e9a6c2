use rust_decimal::Decimal;
use sales_core::{
    models::{OrderItem, SellerStats},
    ports::{BonusStrategy, RevenueStrategy},
};

/// An amount grew past what a [`Decimal`] can represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("amount exceeds the representable range")]
pub struct AmountOverflow;

/// The reference revenue rule: `sale_price × quantity × (1 − discount / 100)`.
///
/// The result is left unrounded; rounding happens once, on the seller totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedRevenue;

impl RevenueStrategy for DiscountedRevenue {
    type Error = AmountOverflow;

    fn revenue(&self, item: &OrderItem) -> Result<Decimal, Self::Error> {
        let remaining = Decimal::ONE - item.discount / Decimal::ONE_HUNDRED;
        item.sale_price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|gross| gross.checked_mul(remaining))
            .ok_or(AmountOverflow)
    }
}

/// The reference bonus rule: a percentage of profit chosen by rank.
///
/// With `rank = index + 1`, the rules are checked in this order:
///
/// 1. `rank == 1` earns `first`
/// 2. `rank == 2` or `rank == 3` earns `runner_up`
/// 3. `rank == total` (last place) earns `last`
/// 4. everyone else earns `common`
///
/// The order matters for small rankings: a lone seller is both first and last
/// and is paid as first, and in a ranking of two or three the last seller is
/// still a runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankBonus {
    /// Percentage paid to the most profitable seller
    pub first: Decimal,
    /// Percentage paid to ranks two and three
    pub runner_up: Decimal,
    /// Percentage paid to the least profitable seller
    pub last: Decimal,
    /// Percentage paid to everyone else
    pub common: Decimal,
}

impl Default for RankBonus {
    fn default() -> Self {
        Self {
            first: Decimal::from(15),
            runner_up: Decimal::from(10),
            last: Decimal::ZERO,
            common: Decimal::from(5),
        }
    }
}

impl RankBonus {
    /// The percentage of profit paid at `index` (0-based) of `total`
    pub fn percentage(&self, index: usize, total: usize) -> Decimal {
        let rank = index + 1;
        if rank == 1 {
            self.first
        } else if rank == 2 || rank == 3 {
            self.runner_up
        } else if rank == total {
            self.last
        } else {
            self.common
        }
    }
}

impl BonusStrategy for RankBonus {
    type Error = AmountOverflow;

    fn bonus(
        &self,
        index: usize,
        total: usize,
        stats: &SellerStats,
    ) -> Result<Decimal, Self::Error> {
        stats
            .profit
            .checked_mul(self.percentage(index, total))
            .and_then(|share| share.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(AmountOverflow)
    }
}
