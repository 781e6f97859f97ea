//! adbcdr library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod adb;
pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use errors::AppResult;

/// Entry point used by main.rs: parse the CLI once, then hand off to the
/// logs command.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    cli::commands::logs::handle(&cli)
}
