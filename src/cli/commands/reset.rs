//! Reset command - clear the feed

use credgate::core::services::{Feed, Remote};
use credgate::store::LocalStore;

/// Clear the feed, server-side first in backend mode
pub fn run(remote: &Remote<'_>, store: &LocalStore<'_>) -> anyhow::Result<()> {
    Feed::new(remote, store).reset()?;
    println!("Feed cleared.");
    Ok(())
}
