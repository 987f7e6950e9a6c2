use clap::Parser;
use sales_engine::Analyzer;
use std::path::PathBuf;
use tracing::{Level, event};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

pub mod config;
pub use self::config::AppConfig;

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "SALESRANK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { mut report } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Report { io, policy, top } => {
                if let Some(policy) = policy {
                    report.revenue_policy = policy.into();
                }
                if let Some(top) = top {
                    report.top_products = top;
                }

                let market = io.read_market()?;
                let analyzer = Analyzer::with_settings(report);
                let results = analyzer.analyze(&market)?;
                io.write_json(&results)?;
            }
            Commands::Validate { io } => {
                let market = io.read_market()?;
                let analyzer = Analyzer::with_settings(report);
                let summary = analyzer.check(&market)?;
                event!(
                    Level::INFO,
                    sellers = summary.sellers,
                    products = summary.products,
                    purchases = summary.purchases,
                    active_sellers = summary.active_sellers,
                    "dataset is valid"
                );
                io.write_json(&summary)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Config file {} does not exist", .0.display())]
    MissingConfig(PathBuf),
}
