use super::IOArgs;
use clap::{Subcommand, ValueEnum};
use sales_engine::RevenuePolicy;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the dataset and write the ranked seller report
    Report {
        #[command(flatten)]
        io: IOArgs,

        /// Override the configured revenue policy
        #[arg(short, long)]
        policy: Option<PolicyFlag>,

        /// Override how many best-selling products are kept per seller
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Check the dataset for problems and write a summary instead of a report
    Validate {
        #[command(flatten)]
        io: IOArgs,
    },
}

/// How revenue is credited per purchase record
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum PolicyFlag {
    /// Sum the revenue of each item
    PerItem,
    /// Trust the record's precomputed total
    OrderTotal,
}

impl From<PolicyFlag> for RevenuePolicy {
    fn from(value: PolicyFlag) -> Self {
        match value {
            PolicyFlag::PerItem => RevenuePolicy::PerItem,
            PolicyFlag::OrderTotal => RevenuePolicy::OrderTotal,
        }
    }
}
