//! Verify command - request a credibility verdict for an article URL

use credgate::core::services::{Remote, Verifier};
use credgate::output::{self, OutputMode};
use credgate::store::LocalStore;

/// Verify `url` and show the report with its permitted publication actions
pub fn run(
    remote: &Remote<'_>,
    store: &LocalStore<'_>,
    url: &str,
    comment: Option<&str>,
    output: OutputMode,
) -> anyhow::Result<()> {
    let url = url.trim();
    anyhow::ensure!(!url.is_empty(), "URL must not be empty");

    let report = Verifier::new(remote, store).verify(url, comment)?;
    output::print_report(&report, output);
    output::print_permitted_actions(report.decision, output);
    Ok(())
}
