//! CLI entry point for the single-suit wait enumerator

use chinitsu::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> chinitsu::Result<()> {
    let cli = Cli::parse();
    Runner::new(cli).run()
}
