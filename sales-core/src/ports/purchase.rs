use crate::models::OrderLine;

/// Repository interface for purchase records.
pub trait PurchaseRepository: super::Repository {
    /// List the purchase records to analyze, in the order they should be scanned.
    fn list_purchases(&self) -> Result<Vec<OrderLine>, Self::Error>;
}
