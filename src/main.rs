//! CLI entry point for the tile rearrangement tool

use clap::Parser;
use retile::io::cli::Cli;

fn main() -> retile::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
