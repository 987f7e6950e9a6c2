#![allow(dead_code)]
use rstest::fixture;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sales_core::models::{OrderItem, OrderLine, Product, Seller};
use sales_engine::MemoryMarket;

pub fn seller(id: &str, first_name: &str, last_name: &str) -> Seller {
    Seller {
        id: id.into(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    }
}

pub fn product(sku: &str, purchase_price: Decimal) -> Product {
    Product {
        sku: sku.into(),
        purchase_price,
    }
}

pub fn item(sku: &str, quantity: u32, sale_price: Decimal, discount: Decimal) -> OrderItem {
    OrderItem {
        sku: sku.into(),
        discount,
        quantity,
        sale_price,
    }
}

pub fn purchase(
    receipt_id: &str,
    seller_id: &str,
    items: Vec<OrderItem>,
    total_amount: Option<Decimal>,
) -> OrderLine {
    OrderLine {
        receipt_id: receipt_id.into(),
        seller_id: seller_id.into(),
        customer_id: None,
        items,
        total_amount,
    }
}

/// Five sellers (one of whom never sells), four products and five receipts.
///
/// With per-item revenue the sellers end up as:
///
/// | seller   | revenue | profit | sales | products     |
/// |----------|---------|--------|-------|--------------|
/// | seller_1 | 43      | 21     | 2     | A: 3, B: 1   |
/// | seller_2 | 30      | 15     | 1     | C: 10        |
/// | seller_3 | 45      | 15     | 1     | B: 3         |
/// | seller_5 | 10      | 10     | 1     | D: 4         |
///
/// seller_3's receipt carries a total of 40, and seller_5's carries none.
#[fixture]
pub fn market() -> MemoryMarket {
    MemoryMarket {
        sellers: vec![
            seller("seller_1", "Ann", "Lee"),
            seller("seller_2", "Bob", "Kim"),
            seller("seller_3", "Cid", "Roe"),
            seller("seller_4", "Dee", "Fox"),
            seller("seller_5", "Eve", "Moe"),
        ],
        products: vec![
            product("SKU_A", dec!(4)),
            product("SKU_B", dec!(10)),
            product("SKU_C", dec!(1.50)),
            product("SKU_D", dec!(0)),
        ],
        purchases: vec![
            purchase(
                "r1",
                "seller_1",
                vec![
                    item("SKU_A", 2, dec!(10), dec!(0)),
                    item("SKU_B", 1, dec!(20), dec!(10)),
                ],
                Some(dec!(38)),
            ),
            purchase(
                "r2",
                "seller_2",
                vec![item("SKU_C", 10, dec!(3), dec!(0))],
                Some(dec!(30)),
            ),
            purchase(
                "r3",
                "seller_1",
                vec![item("SKU_A", 1, dec!(10), dec!(50))],
                Some(dec!(5)),
            ),
            purchase(
                "r4",
                "seller_3",
                vec![item("SKU_B", 3, dec!(15), dec!(0))],
                Some(dec!(40)),
            ),
            purchase(
                "r5",
                "seller_5",
                vec![item("SKU_D", 4, dec!(2.5), dec!(0))],
                None,
            ),
        ],
    }
}

/// A market with `n` sellers, each making one sale of decreasing profit.
pub fn ranked_market(n: usize) -> MemoryMarket {
    MemoryMarket {
        sellers: (0..n)
            .map(|i| seller(&format!("seller_{i}"), "First", &format!("Last{i}")))
            .collect(),
        products: vec![product("SKU_X", dec!(1))],
        purchases: (0..n)
            .map(|i| {
                purchase(
                    &format!("r{i}"),
                    &format!("seller_{i}"),
                    vec![item("SKU_X", (n - i) as u32 * 10, dec!(2), dec!(0))],
                    None,
                )
            })
            .collect(),
    }
}
