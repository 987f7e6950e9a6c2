#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for sales reporting.
///
/// These are plain data structures with minimal behavior: reference data
/// (sellers, products), transactional data (purchase records and their line
/// items), and the aggregated and reported outputs of an analysis run.
pub mod models;

/// Interface traits for sales reporting.
///
/// This module contains the "ports" in the hexagonal architecture pattern:
/// the contracts for data sources that supply sellers, products and purchases,
/// and for the pluggable revenue and bonus calculations. Adapters implement
/// these without the analysis logic knowing where data comes from.
pub mod ports;
