//! Feed command - list published posts

use credgate::core::services::{Feed, Remote};
use credgate::output::{self, OutputMode};
use credgate::store::LocalStore;

/// List published posts, most recent first
pub fn run(remote: &Remote<'_>, store: &LocalStore<'_>, output: OutputMode) -> anyhow::Result<()> {
    let posts = Feed::new(remote, store).list();
    output::print_source_notice(&posts, output);
    output::print_feed(posts.get(), output);
    Ok(())
}
