//! Application configuration management.
//!
//! Configuration is merged from default values, an optional TOML file and
//! environment variables, in increasing order of precedence.

use crate::CliError;
use sales_engine::ReportSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// Report settings (revenue policy, number of top products)
    #[serde(default)]
    pub report: ReportSettings,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `SALESRANK_<SECTION>__<KEY>` to `<section>.<key>`:
    ///
    /// ```bash
    /// export SALESRANK_REPORT__REVENUE_POLICY="order_total"
    /// export SALESRANK_REPORT__TOP_PRODUCTS=5
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(CliError::MissingConfig(path.to_path_buf()).into());
            }
        }

        // Override with environment variables
        config = config.add_source(
            config::Environment::with_prefix("SALESRANK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
