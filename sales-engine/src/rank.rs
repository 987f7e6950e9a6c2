use crate::{AnalysisError, round_money};
use sales_core::{
    models::{SellerReport, SellerStats},
    ports::BonusStrategy,
};
use tracing::{Level, event};

/// Rank sellers by profit and produce the final report.
///
/// Sellers are ordered by unrounded profit, highest first, with ties broken by
/// seller id so that identical inputs always yield identical reports. The
/// bonus strategy sees each seller's 0-based position and the total count.
/// Each seller's products are ordered by quantity, highest first (ties by
/// sku), and cut to `top_products`. Revenue, profit and bonus are then
/// rounded to cents.
pub fn rank<B: BonusStrategy>(
    mut stats: Vec<SellerStats>,
    bonus: &B,
    top_products: usize,
) -> Result<Vec<SellerReport>, AnalysisError> {
    stats.sort_by(|a, b| {
        b.profit
            .cmp(&a.profit)
            .then_with(|| a.seller.id.cmp(&b.seller.id))
    });

    let total = stats.len();
    let report = stats
        .into_iter()
        .enumerate()
        .map(|(index, stats)| {
            let amount = bonus
                .bonus(index, total, &stats)
                .map_err(|err| AnalysisError::Bonus(Box::new(err)))?;

            let SellerStats {
                seller,
                revenue,
                profit,
                sales_count,
                mut products_sold,
            } = stats;

            products_sold.sort_by(|a, b| {
                b.quantity
                    .cmp(&a.quantity)
                    .then_with(|| a.sku.cmp(&b.sku))
            });
            products_sold.truncate(top_products);

            Ok(SellerReport {
                name: seller.full_name(),
                seller_id: seller.id,
                revenue: round_money(revenue),
                profit: round_money(profit),
                sales_count,
                top_products: products_sold,
                bonus: round_money(amount),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    event!(Level::DEBUG, sellers = total, "ranked sellers by profit");

    Ok(report)
}
