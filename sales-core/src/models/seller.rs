use super::SellerId;

/// A seller, as supplied by the reference data.
///
/// Sellers are static for the duration of an analysis; only those that appear
/// in at least one purchase record show up in the final report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seller {
    /// Unique identifier referenced by purchase records
    pub id: SellerId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

impl Seller {
    /// The display name used in reports: first and last name separated by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
