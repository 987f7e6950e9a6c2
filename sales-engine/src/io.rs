use crate::{AnalysisError, MemoryMarket};
use sales_core::models::{OrderLine, Product, Seller};
use serde::{Deserialize, Serialize};

/// The raw dataset, as read from JSON.
///
/// Every collection is optional so that an absent key can be told apart from
/// an empty one: a missing `purchase_records` means there is no data at all,
/// while missing `sellers` or `products` means the dataset is malformed.
/// Unknown keys (such as a `customers` collection) are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawDataset {
    /// The seller reference data
    #[serde(default)]
    pub sellers: Option<Vec<Seller>>,
    /// The product catalog
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    /// The purchase records
    #[serde(default)]
    pub purchase_records: Option<Vec<OrderLine>>,
}

impl RawDataset {
    /// Check that every collection is present and build an in-memory market.
    ///
    /// Emptiness and referential checks are left to the analysis itself.
    pub fn prepare(self) -> Result<MemoryMarket, AnalysisError> {
        let purchases = self
            .purchase_records
            .ok_or(AnalysisError::NoData("purchase records are missing"))?;
        let sellers = self.sellers.ok_or_else(|| {
            AnalysisError::InvalidData("seller records are missing".to_owned())
        })?;
        let products = self.products.ok_or_else(|| {
            AnalysisError::InvalidData("product records are missing".to_owned())
        })?;

        Ok(MemoryMarket {
            sellers,
            products,
            purchases,
        })
    }
}

/// Prepare a dataset that may itself be absent (e.g. a JSON `null`).
pub fn prepare(dataset: Option<RawDataset>) -> Result<MemoryMarket, AnalysisError> {
    dataset
        .ok_or(AnalysisError::NoData("input is missing"))?
        .prepare()
}
