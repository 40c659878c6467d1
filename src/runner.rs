//! Case Runner
//!
//! Prices a batch of cases, writing a receipt and verdict for each. A case that
//! fails to build or price is reported and the batch moves on.

use std::{io, time::Instant};

use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::warn;

use crate::{
    fixtures::{CaseOutcome, PricingCase},
    processor::DiscountProcessor,
    receipt::ReceiptError,
};

/// Price every case, returning how many did not pass.
///
/// # Errors
///
/// Returns an error only if the output cannot be written.
pub fn run_cases<'a>(
    cases: impl IntoIterator<Item = &'a PricingCase>,
    processor: &DiscountProcessor,
    out: &mut impl io::Write,
) -> Result<usize, ReceiptError> {
    let mut failures = 0_usize;

    for case in cases {
        writeln!(out, "Test Case: {}", case.name())?;

        let start = Instant::now();

        let outcome = match case.evaluate(processor) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(case = case.name(), %error, "skipped case");

                writeln!(out, " Error: {error}")?;
                writeln!(out, " Result: Failed\n")?;

                failures += 1;

                continue;
            }
        };

        let elapsed = start.elapsed();

        match &outcome {
            CaseOutcome::Priced { receipt, .. } => {
                receipt.write_to(&mut *out)?;

                if let Some(expected) = case.final_expected_cost {
                    writeln!(out, " Expected: {expected:.2}")?;
                }
            }
            CaseOutcome::Rejected { error, .. } => {
                writeln!(out, " Error: {error}")?;
            }
        }

        let verdict = outcome.verdict();

        if !verdict.is_pass() {
            failures += 1;
        }

        writeln!(
            out,
            " Result: {verdict} ({}, {}s)\n",
            elapsed.human(Truncate::Nano),
            elapsed.as_secs_f32()
        )?;
    }

    Ok(failures)
}
