use crate::models::{Map, Seller, SellerId};

/// Repository interface for seller reference data.
pub trait SellerRepository: super::Repository {
    /// List every known seller, in source order.
    fn list_sellers(&self) -> Result<Vec<Seller>, Self::Error>;

    /// Index the sellers by id.
    ///
    /// The default implementation builds the index from [`Self::list_sellers`];
    /// if ids repeat, the last record wins.
    fn seller_index(&self) -> Result<Map<SellerId, Seller>, Self::Error> {
        Ok(self
            .list_sellers()?
            .into_iter()
            .map(|seller| (seller.id.clone(), seller))
            .collect())
    }
}
