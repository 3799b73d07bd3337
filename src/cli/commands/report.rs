//! Report command - look up a verification report by id

use credgate::core::services::{Remote, Reports};
use credgate::error::GateError;
use credgate::output::{self, OutputMode};
use credgate::store::LocalStore;

/// Show the report for `verification_id`, if it can be resolved
pub fn run(
    remote: &Remote<'_>,
    store: &LocalStore<'_>,
    verification_id: &str,
    output: OutputMode,
) -> anyhow::Result<()> {
    let report = Reports::new(remote, store)
        .get(verification_id)
        .ok_or_else(|| GateError::ReportNotFound(verification_id.to_string()))?;
    output::print_source_notice(&report, output);
    output::print_report(report.get(), output);
    Ok(())
}
