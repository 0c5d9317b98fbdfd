//! CLI entry point for carpet generation

use carpet::io::cli::{CarpetProcessor, Cli};
use carpet::io::logging::init_logging;
use clap::Parser;

fn main() -> carpet::Result<()> {
    init_logging();
    let cli = Cli::parse();
    CarpetProcessor::new(cli).process()
}
