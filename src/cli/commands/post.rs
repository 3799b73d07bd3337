//! Post command - publish a post for a verified article

use credgate::core::services::{Publisher, Remote};
use credgate::models::PostMode;
use credgate::output::{self, OutputMode};
use credgate::store::LocalStore;

/// Publish a post for `verification_id` in the given mode
pub fn run(
    remote: &Remote<'_>,
    store: &LocalStore<'_>,
    verification_id: &str,
    mode: &str,
    output: OutputMode,
) -> anyhow::Result<()> {
    let mode: PostMode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let post = Publisher::new(remote, store).publish_by_id(verification_id, mode)?;
    output::print_source_notice(&post, output);
    output::print_post(post.get(), output);
    Ok(())
}
