//! CLI definitions

use clap::{Parser, Subcommand};

/// credgate - verify article links before they reach the feed
#[derive(Parser, Debug)]
#[command(
    name = "credgate",
    version,
    about = "Verify article links before they reach the feed",
    long_about = "Requests a credibility verdict for an article link and gates \
                  publication on it.\n\n\
                  ALLOW publishes normally, WARN publishes with a caution label,\n\
                  BLOCK disables publication. Without a configured endpoint the\n\
                  tool runs in demo mode with synthesized verdicts."
)]
pub struct Cli {
    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify the credibility of an article URL
    Verify {
        /// Article URL to verify
        url: String,

        /// Comment to attach to the verification request
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Publish a post for a verified article
    Post {
        /// Verification id returned by `verify`
        verification_id: String,

        /// Post mode: normal or warning_label
        #[arg(short, long)]
        mode: String,
    },

    /// List published posts, most recent first
    Feed,

    /// Show a verification report by id
    Report {
        /// Verification id
        verification_id: String,
    },

    /// Clear the feed (server-side in backend mode, then locally)
    Reset,

    /// Show or change the verification service endpoint
    Config {
        /// Set the endpoint base URL (e.g. http://localhost:8000)
        #[arg(long)]
        endpoint: Option<String>,

        /// Clear the endpoint and return to demo mode
        #[arg(long)]
        clear: bool,
    },
}
