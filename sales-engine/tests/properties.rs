use proptest::prelude::*;
use rstest::rstest;
use rstest_reuse::{self, *};
use rust_decimal::Decimal;
use sales_core::models::OrderItem;
use sales_engine::{
    Analyzer, DiscountedRevenue, MemoryMarket, RankBonus, ReportSettings, RevenuePolicy,
    round_money,
};
use std::collections::BTreeSet;

mod all_policies;
use all_policies::all_policies;

mod fixtures;
use fixtures::{item, product, purchase, seller};

prop_compose! {
    fn order_item(products: usize)(
        sku in 0..products,
        quantity in 0u32..25,
        sale_cents in 0i64..50_000,
        discount in 0u32..=100,
    ) -> OrderItem {
        item(
            &format!("SKU_{sku:03}"),
            quantity,
            Decimal::new(sale_cents, 2),
            Decimal::from(discount),
        )
    }
}

/// Markets of 1 to 12 sellers and 1 to 15 products, with up to 80 receipts.
///
/// Receipts either carry their undiscounted total or no total at all, and
/// sellers with a high index may never appear in a receipt.
fn markets() -> impl Strategy<Value = MemoryMarket> {
    (1usize..12, 1usize..15)
        .prop_flat_map(|(sellers, products)| {
            let prices = prop::collection::vec(0i64..40_000, products);
            let receipts = prop::collection::vec(
                (
                    0..sellers,
                    prop::collection::vec(order_item(products), 0..6),
                    any::<bool>(),
                ),
                1..80,
            );
            (Just(sellers), prices, receipts)
        })
        .prop_map(|(sellers, prices, receipts)| MemoryMarket {
            sellers: (0..sellers)
                .map(|i| seller(&format!("seller_{i:02}"), "Seller", &format!("No{i}")))
                .collect(),
            products: prices
                .into_iter()
                .enumerate()
                .map(|(i, cents)| product(&format!("SKU_{i:03}"), Decimal::new(cents, 2)))
                .collect(),
            purchases: receipts
                .into_iter()
                .enumerate()
                .map(|(r, (seller_index, items, with_total))| {
                    let total = with_total.then(|| {
                        items
                            .iter()
                            .map(|item| item.sale_price * Decimal::from(item.quantity))
                            .sum::<Decimal>()
                    });
                    purchase(
                        &format!("r{r}"),
                        &format!("seller_{seller_index:02}"),
                        items,
                        total,
                    )
                })
                .collect(),
        })
}

fn analyzer(policy: RevenuePolicy) -> Analyzer<DiscountedRevenue, RankBonus> {
    Analyzer::with_settings(ReportSettings {
        revenue_policy: policy,
        ..Default::default()
    })
}

#[apply(all_policies)]
fn sales_counts_sum_to_purchases(#[case] policy: RevenuePolicy) {
    proptest!(|(market in markets())| {
        let report = analyzer(policy).analyze(&market).unwrap();

        let total = report.iter().map(|row| row.sales_count).sum::<u64>();
        prop_assert_eq!(total, market.purchases.len() as u64);
    });
}

#[apply(all_policies)]
fn one_row_per_active_seller(#[case] policy: RevenuePolicy) {
    proptest!(|(market in markets())| {
        let report = analyzer(policy).analyze(&market).unwrap();

        let active = market
            .purchases
            .iter()
            .map(|line| line.seller_id.clone())
            .collect::<BTreeSet<_>>();
        let reported = report
            .iter()
            .map(|row| row.seller_id.clone())
            .collect::<BTreeSet<_>>();

        prop_assert_eq!(report.len(), active.len());
        prop_assert_eq!(reported, active);
    });
}

#[apply(all_policies)]
fn sorted_by_profit(#[case] policy: RevenuePolicy) {
    proptest!(|(market in markets())| {
        let report = analyzer(policy).analyze(&market).unwrap();

        prop_assert!(report.windows(2).all(|w| w[0].profit >= w[1].profit));
    });
}

#[apply(all_policies)]
fn top_products_bounded_and_sorted(#[case] policy: RevenuePolicy) {
    proptest!(|(market in markets())| {
        let report = analyzer(policy).analyze(&market).unwrap();

        for row in &report {
            prop_assert!(row.top_products.len() <= 10);
            for w in row.top_products.windows(2) {
                prop_assert!(w[0].quantity >= w[1].quantity);
                if w[0].quantity == w[1].quantity {
                    prop_assert!(w[0].sku < w[1].sku);
                }
            }
        }
    });
}

#[apply(all_policies)]
fn money_is_rounded_to_cents(#[case] policy: RevenuePolicy) {
    proptest!(|(market in markets())| {
        let report = analyzer(policy).analyze(&market).unwrap();

        for row in &report {
            for amount in [row.revenue, row.profit, row.bonus] {
                prop_assert_eq!(amount.scale(), 2);
                prop_assert_eq!(round_money(amount), amount);
            }
        }
    });
}

#[apply(all_policies)]
fn repeated_runs_are_identical(#[case] policy: RevenuePolicy) {
    proptest!(|(market in markets())| {
        let first = analyzer(policy).analyze(&market).unwrap();
        let second = analyzer(policy).analyze(&market).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    });
}

#[test]
fn order_totals_ignore_discounts() {
    // the generated totals are undiscounted, so crediting them can only raise revenue
    proptest!(|(market in markets())| {
        let per_item = analyzer(RevenuePolicy::PerItem).analyze(&market).unwrap();
        let order_total = analyzer(RevenuePolicy::OrderTotal)
            .analyze(&market)
            .unwrap();

        for row in &per_item {
            let other = order_total
                .iter()
                .find(|other| other.seller_id == row.seller_id)
                .unwrap();
            prop_assert!(other.revenue >= row.revenue);
            prop_assert_eq!(other.profit, row.profit);
        }
    });
}
