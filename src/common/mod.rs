//! Items used by the command-line front end.

mod args;
mod config;
mod output;

pub use args::*;
pub use config::*;
pub use output::*;

pub const CONFIG_FILENAME: &str = "emoji.toml";
