mod bonus;
mod product;
mod purchase;
mod revenue;
mod seller;

pub use bonus::BonusStrategy;
pub use product::ProductRepository;
pub use purchase::PurchaseRepository;
pub use revenue::RevenueStrategy;
pub use seller::SellerRepository;

/// Base trait shared by all data-source ports.
///
/// It fixes the error type every repository reports, so that a single adapter
/// can implement all of the specialized repositories below with one error enum.
pub trait Repository {
    /// The error returned when the underlying data source cannot be read
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The "marker" trait for a complete data source: anything that can list
/// sellers, products and purchases can feed an analysis.
pub trait MarketRepository: SellerRepository + ProductRepository + PurchaseRepository {}

impl<T: SellerRepository + ProductRepository + PurchaseRepository> MarketRepository for T {}
