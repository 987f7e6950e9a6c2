use sales_core::models::{ReceiptId, SellerId, Sku};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can stop an analysis.
///
/// Validation failures are raised before any aggregation work starts, and an
/// analysis never returns a partial report.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// There is nothing to analyze: the input or its purchase records are missing or empty
    #[error("no data: {0}")]
    NoData(&'static str),

    /// The input is structurally present but unusable
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A purchase record names a seller that is not in the seller data
    #[error("receipt {receipt_id} references unknown seller {seller_id}")]
    UnknownSeller {
        /// The offending receipt
        receipt_id: ReceiptId,
        /// The seller id that failed to resolve
        seller_id: SellerId,
    },

    /// An order item names a product that is not in the catalog
    #[error("receipt {receipt_id} references unknown product {sku}")]
    UnknownProduct {
        /// The offending receipt
        receipt_id: ReceiptId,
        /// The sku that failed to resolve
        sku: Sku,
    },

    /// A seller's running totals grew past what a decimal can represent
    #[error("totals overflowed while adding receipt {receipt_id}")]
    Overflow {
        /// The receipt being added when the totals overflowed
        receipt_id: ReceiptId,
    },

    /// The data source could not be read
    #[error("failed to read market data")]
    Repository(#[source] BoxError),

    /// The revenue strategy failed
    #[error("revenue strategy failed")]
    Revenue(#[source] BoxError),

    /// The bonus strategy failed
    #[error("bonus strategy failed")]
    Bonus(#[source] BoxError),
}
