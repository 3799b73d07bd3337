//! Command handlers, one module per subcommand

pub mod config_cmd;
pub mod feed;
pub mod post;
pub mod report;
pub mod reset;
pub mod verify;
