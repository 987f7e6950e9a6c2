use crate::AnalysisError;
use rust_decimal::Decimal;
use sales_core::models::{Map, OrderLine, Product, Seller, SellerId, Sku};

/// Check that the inputs can be analyzed, before any aggregation work is done.
///
/// The checks run in this order, and the first failure is returned:
///
/// 1. purchase records must be non-empty ([`AnalysisError::NoData`])
/// 2. sellers must be non-empty ([`AnalysisError::InvalidData`])
/// 3. purchase prices must be non-negative ([`AnalysisError::InvalidData`])
/// 4. every purchase must name a known seller, and every item a known product
///    with a discount in 0..=100 and a non-negative sale price
pub fn validate(
    sellers: &Map<SellerId, Seller>,
    products: &Map<Sku, Product>,
    purchases: &[OrderLine],
) -> Result<(), AnalysisError> {
    if purchases.is_empty() {
        return Err(AnalysisError::NoData("purchase records are empty"));
    }

    if sellers.is_empty() {
        return Err(AnalysisError::InvalidData(
            "seller records must be a non-empty collection".to_owned(),
        ));
    }

    if let Some(product) = products
        .values()
        .find(|product| product.purchase_price.is_sign_negative())
    {
        return Err(AnalysisError::InvalidData(format!(
            "product {} has a negative purchase price",
            product.sku
        )));
    }

    for line in purchases {
        if !sellers.contains_key(&line.seller_id) {
            return Err(AnalysisError::UnknownSeller {
                receipt_id: line.receipt_id.clone(),
                seller_id: line.seller_id.clone(),
            });
        }

        for item in &line.items {
            if !products.contains_key(&item.sku) {
                return Err(AnalysisError::UnknownProduct {
                    receipt_id: line.receipt_id.clone(),
                    sku: item.sku.clone(),
                });
            }

            if item.discount < Decimal::ZERO || item.discount > Decimal::ONE_HUNDRED {
                return Err(AnalysisError::InvalidData(format!(
                    "receipt {} has a discount of {} on {}, expected 0 to 100",
                    line.receipt_id, item.discount, item.sku
                )));
            }

            if item.sale_price < Decimal::ZERO {
                return Err(AnalysisError::InvalidData(format!(
                    "receipt {} has a negative sale price on {}",
                    line.receipt_id, item.sku
                )));
            }
        }
    }

    Ok(())
}
