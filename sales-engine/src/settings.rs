/// The number of products kept in each seller's `top_products` unless configured otherwise
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// How revenue is credited to a seller for each purchase record.
///
/// Profit is always computed item by item from the revenue strategy, whichever
/// policy is chosen. A run uses exactly one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RevenuePolicy {
    /// Revenue is the sum of the revenue strategy over the record's items
    #[default]
    PerItem,
    /// Revenue is the record's precomputed `total_amount`. Records without a
    /// total fall back to the per-item sum.
    OrderTotal,
}

/// Tunables for a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReportSettings {
    /// How revenue is accrued
    pub revenue_policy: RevenuePolicy,
    /// How many best-selling products to keep per seller
    pub top_products: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            revenue_policy: RevenuePolicy::default(),
            top_products: DEFAULT_TOP_PRODUCTS,
        }
    }
}
