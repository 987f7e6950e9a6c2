use crate::{AnalysisError, RevenuePolicy};
use rust_decimal::Decimal;
use sales_core::{
    models::{Map, OrderLine, Product, ProductQuantity, Seller, SellerId, SellerStats, Sku},
    ports::RevenueStrategy,
};
use tracing::{Level, event};

/// The running totals for one seller during the purchase scan.
///
/// Each tally is exclusively owned by the scan and borrows only from the
/// inputs. Once the scan completes it is consumed into an owned
/// [`SellerStats`], so nothing produced here aliases the report.
struct SellerTally<'a> {
    seller: &'a Seller,
    revenue: Decimal,
    profit: Decimal,
    sales_count: u64,
    products_sold: crate::Map<&'a Sku, u64>,
}

impl<'a> SellerTally<'a> {
    fn new(seller: &'a Seller) -> Self {
        Self {
            seller,
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: crate::Map::default(),
        }
    }

    fn finish(self) -> SellerStats {
        SellerStats {
            seller: self.seller.clone(),
            revenue: self.revenue,
            profit: self.profit,
            sales_count: self.sales_count,
            products_sold: self
                .products_sold
                .into_iter()
                .map(|(sku, quantity)| ProductQuantity {
                    sku: sku.clone(),
                    quantity,
                })
                .collect(),
        }
    }
}

/// Accumulate per-seller totals over the purchase records.
///
/// Purchases are scanned once, in order. Every record counts as one sale for
/// its seller; its items add to the seller's profit (`revenue − purchase_price ×
/// quantity`, per item) and to the units sold per product. Revenue is credited
/// according to `policy`.
///
/// Returns one [`SellerStats`] per distinct seller that appears in
/// `purchases`, in order of first appearance, with `products_sold` in order of
/// first sale. Sellers without purchases are omitted.
///
/// # Errors
///
/// - [`AnalysisError::UnknownSeller`] / [`AnalysisError::UnknownProduct`] if a
///   reference does not resolve
/// - [`AnalysisError::Revenue`] if the strategy fails, wrapping its error
/// - [`AnalysisError::Overflow`] if a seller's totals outgrow a [`Decimal`]
pub fn aggregate<'a, R: RevenueStrategy>(
    sellers: &'a Map<SellerId, Seller>,
    products: &Map<Sku, Product>,
    purchases: &'a [OrderLine],
    revenue: &R,
    policy: RevenuePolicy,
) -> Result<Vec<SellerStats>, AnalysisError> {
    let mut tallies = crate::Map::<&'a SellerId, SellerTally<'a>>::default();

    for line in purchases {
        let seller = sellers
            .get(&line.seller_id)
            .ok_or_else(|| AnalysisError::UnknownSeller {
                receipt_id: line.receipt_id.clone(),
                seller_id: line.seller_id.clone(),
            })?;

        let tally = tallies
            .entry(&line.seller_id)
            .or_insert_with(|| SellerTally::new(seller));
        tally.sales_count += 1;

        let overflow = || AnalysisError::Overflow {
            receipt_id: line.receipt_id.clone(),
        };

        let mut line_revenue = Decimal::ZERO;
        for item in &line.items {
            let product = products
                .get(&item.sku)
                .ok_or_else(|| AnalysisError::UnknownProduct {
                    receipt_id: line.receipt_id.clone(),
                    sku: item.sku.clone(),
                })?;

            let item_revenue = revenue
                .revenue(item)
                .map_err(|err| AnalysisError::Revenue(Box::new(err)))?;
            let cost = product
                .purchase_price
                .checked_mul(Decimal::from(item.quantity))
                .ok_or_else(overflow)?;

            line_revenue = line_revenue
                .checked_add(item_revenue)
                .ok_or_else(overflow)?;
            tally.profit = item_revenue
                .checked_sub(cost)
                .and_then(|profit| tally.profit.checked_add(profit))
                .ok_or_else(overflow)?;
            *tally.products_sold.entry(&item.sku).or_insert(0) += u64::from(item.quantity);
        }

        let credited = match policy {
            RevenuePolicy::PerItem => line_revenue,
            RevenuePolicy::OrderTotal => line.total_amount.unwrap_or(line_revenue),
        };
        tally.revenue = tally.revenue.checked_add(credited).ok_or_else(overflow)?;
    }

    event!(
        Level::DEBUG,
        purchases = purchases.len(),
        sellers = tallies.len(),
        "aggregated purchase records"
    );

    Ok(tallies.into_values().map(SellerTally::finish).collect())
}
