//! Configuration
//!
//! Command-line and environment settings for the `checkout-pricing` binary.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Checkout pricing configuration
#[derive(Debug, Parser)]
#[command(
    name = "checkout-pricing",
    about = "Price carts against campaign fixtures",
    long_about = None
)]
pub struct PricingConfig {
    /// Case file to price (YAML or JSON)
    #[arg(
        short,
        long,
        env = "PRICING_FIXTURE",
        default_value = "fixtures/cases/default.yml"
    )]
    pub fixture: PathBuf,

    /// Only price the case with this name
    #[arg(short, long, env = "PRICING_CASE")]
    pub case: Option<String>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl PricingConfig {
    /// Whether a case with the given name should be priced.
    pub fn selects(&self, case_name: &str) -> bool {
        self.case.as_deref().is_none_or(|wanted| wanted == case_name)
    }
}
