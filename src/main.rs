//! CLI entry point for the jigsaw puzzle generator

use clap::Parser;
use puzzgen::io::cli::{Cli, PuzzleRunner};
use puzzgen::io::logging::init_logging;

fn main() -> puzzgen::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet)?;
    let mut runner = PuzzleRunner::new(cli);
    runner.run()
}
