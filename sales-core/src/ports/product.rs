use crate::models::{Map, Product, Sku};

/// Repository interface for the product catalog.
pub trait ProductRepository: super::Repository {
    /// List every known product, in source order.
    fn list_products(&self) -> Result<Vec<Product>, Self::Error>;

    /// Index the products by sku.
    ///
    /// The default implementation builds the index from [`Self::list_products`];
    /// if skus repeat, the last record wins.
    fn product_index(&self) -> Result<Map<Sku, Product>, Self::Error> {
        Ok(self
            .list_products()?
            .into_iter()
            .map(|product| (product.sku.clone(), product))
            .collect())
    }
}
