use sales_core::{
    models::{OrderLine, Product, Seller},
    ports::{ProductRepository, PurchaseRepository, Repository, SellerRepository},
};
use std::convert::Infallible;

/// An in-memory data source.
///
/// Every call hands out fresh copies, so an analysis never mutates the
/// market it reads from.
#[derive(Debug, Clone, Default)]
pub struct MemoryMarket {
    /// The seller reference data
    pub sellers: Vec<Seller>,
    /// The product catalog
    pub products: Vec<Product>,
    /// The purchase records, in scan order
    pub purchases: Vec<OrderLine>,
}

impl Repository for MemoryMarket {
    type Error = Infallible;
}

impl SellerRepository for MemoryMarket {
    fn list_sellers(&self) -> Result<Vec<Seller>, Self::Error> {
        Ok(self.sellers.clone())
    }
}

impl ProductRepository for MemoryMarket {
    fn list_products(&self) -> Result<Vec<Product>, Self::Error> {
        Ok(self.products.clone())
    }
}

impl PurchaseRepository for MemoryMarket {
    fn list_purchases(&self) -> Result<Vec<OrderLine>, Self::Error> {
        Ok(self.purchases.clone())
    }
}
