//! Interactive crossword prompt generator and JSON validator.
//!
//! Prints a prompt asking for a themed crossword in a fixed JSON shape, then
//! validates the JSON pasted back in.

mod cli;
mod config;
mod input;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    config::init_tracing(cli.verbose);
    cli.run()
}
