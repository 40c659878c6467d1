//! Checkout Pricing
//!
//! Prices every case in a fixture file and prints a receipt and verdict for each.
//!
//! Use `-f` to choose the case file
//! Use `-c` to price a single case by name

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use checkout_pricing::{
    config::PricingConfig, fixtures::Fixture, logging::init_subscriber,
    processor::DiscountProcessor, runner::run_cases,
};

/// Checkout pricing entry point
pub fn main() -> Result<ExitCode> {
    let config = PricingConfig::parse();

    init_subscriber(&config.logging)?;

    let cases = Fixture::load_path(&config.fixture)?;

    info!(fixture = %config.fixture.display(), cases = cases.len(), "loaded cases");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let selected = cases.iter().filter(|case| config.selects(case.name()));
    let failures = run_cases(selected, &DiscountProcessor::new(), &mut handle)?;

    if failures > 0 {
        writeln!(handle, "{failures} case(s) failed")?;

        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
