mod ids;
mod map;
mod product;
mod purchase;
mod report;
mod seller;
mod stats;

pub use ids::{CustomerId, ReceiptId, SellerId, Sku};
pub use map::Map;
pub use product::Product;
pub use purchase::{OrderItem, OrderLine};
pub use report::SellerReport;
pub use seller::Seller;
pub use stats::{ProductQuantity, SellerStats};
