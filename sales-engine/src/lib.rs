#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod aggregate;
pub use aggregate::aggregate;

mod analyzer;
pub use analyzer::{Analyzer, DatasetSummary};

mod error;
pub use error::AnalysisError;

mod memory;
pub use memory::MemoryMarket;

mod rank;
pub use rank::rank;

mod rounding;
pub use rounding::{MONEY_SCALE, round_money};

mod settings;
pub use settings::{DEFAULT_TOP_PRODUCTS, ReportSettings, RevenuePolicy};

mod strategies;
pub use strategies::{AmountOverflow, DiscountedRevenue, RankBonus};

mod validate;
pub use validate::validate;

/// A serde model of the raw JSON dataset
#[cfg(feature = "io")]
pub mod io;

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
pub(crate) type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
